//! Scope extraction and the permission oracle over the bundled dataset.

use region_scope::region::RegionSource;
use region_scope::scope::{extract_scope, is_within_scope};
use region_scope::{RegionCode, RegionTree, ScopeDescriptor, ScopeLevel};

fn code(s: &str) -> RegionCode {
    s.parse().unwrap()
}

fn jiangsu() -> RegionTree {
    let source =
        RegionSource::from_json(r#"{"Jiangsu": {"Changzhou": ["Xinbei", "Tianning"]}}"#).unwrap();
    RegionTree::from_source(&source).unwrap()
}

/// Every descriptor the bundled tree can produce, plus a few that miss.
fn all_descriptors(tree: &RegionTree) -> Vec<ScopeDescriptor> {
    let mut out = vec![ScopeDescriptor::unrestricted()];
    tree.walk(|n| {
        for level in [ScopeLevel::Province, ScopeLevel::City, ScopeLevel::District] {
            out.push(ScopeDescriptor::new(level, n.code));
        }
    });
    out.push(ScopeDescriptor::province(code("990000")));
    out.push(ScopeDescriptor::city(code("019900")));
    out.push(ScopeDescriptor::district(RegionCode::NO_MATCH));
    out
}

// ---------------------------------------------------------------------------
// Extraction shapes
// ---------------------------------------------------------------------------

#[test]
fn city_scope_scenario() {
    let tree = jiangsu();
    let sub = extract_scope(tree.nodes(), &ScopeDescriptor::city(code("010100")));
    let json = serde_json::to_value(&sub).unwrap();
    assert_eq!(json[0]["label"], "Jiangsu");
    assert_eq!(json[0]["children"].as_array().unwrap().len(), 1);
    assert_eq!(json[0]["children"][0]["label"], "Changzhou");
    let districts: Vec<&str> = json[0]["children"][0]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["label"].as_str().unwrap())
        .collect();
    assert_eq!(districts, vec!["Xinbei", "Tianning"]);
}

#[test]
fn province_scope_keeps_full_fanout() {
    let tree = RegionTree::bundled().unwrap();
    let jiangsu = &tree.nodes()[0];
    let sub = extract_scope(tree.nodes(), &ScopeDescriptor::province(jiangsu.code));
    assert_eq!(sub.nodes(), std::slice::from_ref(jiangsu));
}

#[test]
fn district_scope_is_single_path() {
    let tree = RegionTree::bundled().unwrap();
    let sub = extract_scope(tree.nodes(), &ScopeDescriptor::district(code("020305")));
    assert_eq!(sub.node_count(), 3);
    let province = &sub.nodes()[0];
    assert_eq!(province.code, code("020000"));
    assert_eq!(province.children.len(), 1);
    assert_eq!(province.children[0].code, code("020300"));
    assert_eq!(province.children[0].children.len(), 1);
    assert_eq!(province.children[0].children[0].code, code("020305"));
}

#[test]
fn unrestricted_returns_whole_tree() {
    let tree = RegionTree::bundled().unwrap();
    let sub = extract_scope(tree.nodes(), &ScopeDescriptor::unrestricted());
    assert_eq!(sub.node_count(), tree.node_count());
    assert_eq!(sub.nodes(), tree.nodes());
}

#[test]
fn unresolvable_scope_is_empty_not_full() {
    let tree = RegionTree::bundled().unwrap();
    for d in [
        ScopeDescriptor::province(code("990000")),
        ScopeDescriptor::city(code("019900")),
        ScopeDescriptor::district(code("010199")),
        ScopeDescriptor::district(RegionCode::NO_MATCH),
    ] {
        let sub = extract_scope(tree.nodes(), &d);
        assert!(sub.is_empty(), "{d} should be empty");
        assert!(sub.require_accessible(&d).is_err());
    }
}

// ---------------------------------------------------------------------------
// Permission oracle
// ---------------------------------------------------------------------------

#[test]
fn oracle_scenarios() {
    let tree = jiangsu();
    let scope = ScopeDescriptor::city(code("010100"));
    assert!(is_within_scope(tree.nodes(), code("010101"), &scope));
    assert!(!is_within_scope(tree.nodes(), code("020000"), &scope));
}

#[test]
fn oracle_agrees_with_extraction() {
    let tree = RegionTree::bundled().unwrap();
    let mut targets = Vec::new();
    tree.walk(|n| targets.push(n.code));
    targets.push(code("990000"));

    for descriptor in all_descriptors(&tree) {
        let sub = extract_scope(tree.nodes(), &descriptor);
        for &target in &targets {
            let in_tree = tree.find(target).is_some();
            if descriptor.is_unrestricted() && !in_tree {
                continue;
            }
            assert_eq!(
                is_within_scope(tree.nodes(), target, &descriptor),
                sub.contains(target),
                "descriptor {descriptor}, target {target}"
            );
        }
    }
}

#[test]
fn sibling_regions_are_denied() {
    let tree = RegionTree::bundled().unwrap();
    let scope = ScopeDescriptor::city(code("010100"));
    assert!(!is_within_scope(tree.nodes(), code("010200"), &scope));
    assert!(!is_within_scope(tree.nodes(), code("010201"), &scope));
    assert!(is_within_scope(tree.nodes(), code("010100"), &scope));
}
