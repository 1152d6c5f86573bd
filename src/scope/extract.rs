use super::{ScopeDescriptor, ScopeLevel, ScopeSubtree};
use crate::region::{RegionCode, RegionNode};

/// Derive the part of the full tree visible under `descriptor`.
///
/// - Unrestricted: the whole tree.
/// - Province: that province with every city and district.
/// - City: its province holding only that city, with all its districts.
/// - District: the single path province -> city -> district.
///
/// Any code that does not resolve at the descriptor's level yields an empty
/// subtree, never a wider one.
pub fn extract_scope(nodes: &[RegionNode], descriptor: &ScopeDescriptor) -> ScopeSubtree {
    let extracted = match descriptor.level {
        ScopeLevel::Unrestricted => Some(nodes.to_vec()),
        ScopeLevel::Province => province_scope(nodes, descriptor.code),
        ScopeLevel::City => city_scope(nodes, descriptor.code),
        ScopeLevel::District => district_scope(nodes, descriptor.code),
    };

    match extracted {
        Some(subtree) => {
            tracing::debug!("scope {} covers {} province(s)", descriptor, subtree.len());
            ScopeSubtree::from_nodes(subtree)
        }
        None => {
            tracing::warn!("scope {} does not resolve; no accessible regions", descriptor);
            ScopeSubtree::empty()
        }
    }
}

fn province_scope(nodes: &[RegionNode], code: RegionCode) -> Option<Vec<RegionNode>> {
    let province = nodes.iter().find(|n| n.code == code)?;
    Some(vec![province.clone()])
}

fn city_scope(nodes: &[RegionNode], code: RegionCode) -> Option<Vec<RegionNode>> {
    let province = nodes.iter().find(|n| n.code == code.province_code())?;
    let city = province.child_by_code(code)?;

    let mut pruned = province.without_children();
    pruned.children.push(city.clone());
    Some(vec![pruned])
}

fn district_scope(nodes: &[RegionNode], code: RegionCode) -> Option<Vec<RegionNode>> {
    let province = nodes.iter().find(|n| n.code == code.province_code())?;
    let city = province.child_by_code(code.city_code())?;
    let district = city.child_by_code(code)?;

    let mut pruned_city = city.without_children();
    pruned_city.children.push(district.clone());
    let mut pruned = province.without_children();
    pruned.children.push(pruned_city);
    Some(vec![pruned])
}
