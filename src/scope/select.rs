//! Cascading province/city/district choices restricted to an admin's scope.

use serde::Serialize;

use super::ScopeSubtree;
use crate::region::RegionNode;

/// One entry of a selection list. The value is the label itself, since
/// record forms store names rather than codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaOption {
    pub label: String,
    pub value: String,
}

impl From<&RegionNode> for AreaOption {
    fn from(node: &RegionNode) -> Self {
        Self {
            label: node.label.clone(),
            value: node.label.clone(),
        }
    }
}

pub fn province_options(subtree: &ScopeSubtree) -> Vec<AreaOption> {
    subtree.nodes().iter().map(AreaOption::from).collect()
}

/// Cities of `province` within scope; empty if the province is not visible.
pub fn city_options(subtree: &ScopeSubtree, province: &str) -> Vec<AreaOption> {
    if province.is_empty() {
        return Vec::new();
    }
    find_province(subtree, province)
        .map(|p| p.children.iter().map(AreaOption::from).collect())
        .unwrap_or_default()
}

/// Districts of `province`/`city` within scope.
pub fn district_options(subtree: &ScopeSubtree, province: &str, city: &str) -> Vec<AreaOption> {
    if province.is_empty() || city.is_empty() {
        return Vec::new();
    }
    find_province(subtree, province)
        .and_then(|p| p.child_by_label(city))
        .map(|c| c.children.iter().map(AreaOption::from).collect())
        .unwrap_or_default()
}

/// Name-based permission check against the scoped subtree.
///
/// Each non-empty name must be visible under the previous one; checking
/// stops successfully at the first empty name. An empty subtree permits
/// nothing.
pub fn validate_area_permission(
    subtree: &ScopeSubtree,
    province: &str,
    city: &str,
    district: &str,
) -> bool {
    let Some(p) = find_province(subtree, province) else {
        return false;
    };
    if city.is_empty() {
        return true;
    }
    let Some(c) = p.child_by_label(city) else {
        return false;
    };
    if district.is_empty() {
        return true;
    }
    c.child_by_label(district).is_some()
}

fn find_province<'a>(subtree: &'a ScopeSubtree, province: &str) -> Option<&'a RegionNode> {
    subtree.nodes().iter().find(|p| p.label == province)
}
