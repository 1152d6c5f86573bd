use super::{extract_scope, ScopeDescriptor};
use crate::region::{RegionCode, RegionNode};

/// Whether `target` lies on or below the anchor of `descriptor`.
///
/// Unrestricted scopes contain every code. Otherwise the scope is extracted
/// and searched, the anchor node included; an unresolvable scope contains
/// nothing.
pub fn is_within_scope(nodes: &[RegionNode], target: RegionCode, descriptor: &ScopeDescriptor) -> bool {
    if descriptor.is_unrestricted() {
        return true;
    }
    let allowed = extract_scope(nodes, descriptor).contains(target);
    tracing::debug!(
        "{} {} for scope {}",
        target,
        if allowed { "allowed" } else { "denied" },
        descriptor
    );
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{RegionSource, RegionTree};

    fn tree() -> RegionTree {
        let source = RegionSource::from_json(
            r#"{"Jiangsu": {"Changzhou": ["Xinbei", "Tianning"]}, "Zhejiang": {"Hangzhou": ["Xihu"]}}"#,
        )
        .unwrap();
        RegionTree::from_source(&source).unwrap()
    }

    fn code(s: &str) -> RegionCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_city_scope_contains_its_districts() {
        let t = tree();
        let scope = ScopeDescriptor::city(code("010100"));
        assert!(is_within_scope(t.nodes(), code("010101"), &scope));
        assert!(!is_within_scope(t.nodes(), code("020000"), &scope));
    }

    #[test]
    fn test_anchor_is_within_its_own_scope() {
        let t = tree();
        let scope = ScopeDescriptor::district(code("010102"));
        assert!(is_within_scope(t.nodes(), code("010102"), &scope));
        assert!(!is_within_scope(t.nodes(), code("010101"), &scope));
    }

    #[test]
    fn test_unresolved_scope_denies() {
        let t = tree();
        let scope = ScopeDescriptor::province(code("090000"));
        assert!(!is_within_scope(t.nodes(), code("010000"), &scope));
    }

    #[test]
    fn test_unrestricted_allows() {
        let t = tree();
        assert!(is_within_scope(
            t.nodes(),
            code("020101"),
            &ScopeDescriptor::unrestricted()
        ));
    }
}
