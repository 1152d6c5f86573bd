use serde::Serialize;

use super::{RegionCode, RegionLevel, RegionNode};

/// A non-empty name that matched nothing at its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupMiss {
    pub level: RegionLevel,
    pub name: String,
}

/// Outcome of a name-based lookup: the most specific code reached, plus the
/// miss that stopped the descent, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub code: RegionCode,
    pub miss: Option<LookupMiss>,
}

impl Resolution {
    fn hit(code: RegionCode) -> Self {
        Self { code, miss: None }
    }

    fn stop(code: RegionCode, level: RegionLevel, name: &str) -> Self {
        tracing::warn!("no {} named '{}', falling back to {}", level, name, code);
        Self {
            code,
            miss: Some(LookupMiss {
                level,
                name: name.to_string(),
            }),
        }
    }
}

/// Resolve province/city/district names to the most specific code.
///
/// Unknown province yields [`RegionCode::NO_MATCH`]. An empty or unknown city
/// yields the province code, an empty or unknown district the city code.
/// Labels match exactly; the first duplicate wins.
pub fn resolve(nodes: &[RegionNode], province: &str, city: &str, district: &str) -> Resolution {
    let Some(p) = nodes.iter().find(|n| n.label == province) else {
        return Resolution::stop(RegionCode::NO_MATCH, RegionLevel::Province, province);
    };

    if city.is_empty() {
        return Resolution::hit(p.code);
    }
    let Some(c) = p.child_by_label(city) else {
        return Resolution::stop(p.code, RegionLevel::City, city);
    };

    if district.is_empty() {
        return Resolution::hit(c.code);
    }
    match c.child_by_label(district) {
        Some(d) => Resolution::hit(d.code),
        None => Resolution::stop(c.code, RegionLevel::District, district),
    }
}

/// Like [`resolve`], returning only the code.
pub fn resolve_code(nodes: &[RegionNode], province: &str, city: &str, district: &str) -> RegionCode {
    resolve(nodes, province, city, district).code
}

/// Depth-first search for the node carrying `code`.
pub fn find_node(nodes: &[RegionNode], code: RegionCode) -> Option<&RegionNode> {
    for node in nodes {
        if node.code == code {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, code) {
            return Some(found);
        }
    }
    None
}

/// Label of the node carrying `code`, or an empty string.
pub fn find_label_by_code(nodes: &[RegionNode], code: RegionCode) -> String {
    find_node(nodes, code)
        .map(|n| n.label.clone())
        .unwrap_or_default()
}
