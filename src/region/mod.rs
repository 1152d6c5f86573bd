pub mod builder;
pub mod code;
pub mod resolve;
pub mod source;

pub use code::RegionCode;
pub use resolve::{find_label_by_code, find_node, resolve, resolve_code, LookupMiss, Resolution};
pub use source::RegionSource;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The three administrative levels, ordered from broadest to narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Province,
    City,
    District,
}

impl std::fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionLevel::Province => write!(f, "province"),
            RegionLevel::City => write!(f, "city"),
            RegionLevel::District => write!(f, "district"),
        }
    }
}

/// One node of the region tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionNode {
    /// Display name, never empty.
    pub label: String,

    /// Code derived from the node's ordinal path.
    pub code: RegionCode,

    pub level: RegionLevel,

    /// Children in source order. Always empty for districts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RegionNode>,
}

impl RegionNode {
    /// Copy of this node without its children.
    pub fn without_children(&self) -> Self {
        Self {
            label: self.label.clone(),
            code: self.code,
            level: self.level,
            children: Vec::new(),
        }
    }

    /// Direct child with exactly this label; first match wins.
    pub fn child_by_label(&self, label: &str) -> Option<&RegionNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Direct child carrying this code.
    pub fn child_by_code(&self, code: RegionCode) -> Option<&RegionNode> {
        self.children.iter().find(|c| c.code == code)
    }
}

/// Total number of nodes in a forest, counting every level.
pub fn count_nodes(nodes: &[RegionNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + count_nodes(&n.children))
        .sum()
}

/// Depth-first, pre-order visit of every node in a forest.
pub fn walk<'a, F>(nodes: &'a [RegionNode], visit: &mut F)
where
    F: FnMut(&'a RegionNode),
{
    for node in nodes {
        visit(node);
        walk(&node.children, visit);
    }
}

/// The full, immutable province/city/district tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
    fingerprint: String,
}

impl RegionTree {
    /// Build the tree from a source dataset.
    pub fn from_source(source: &RegionSource) -> Result<Self> {
        let nodes = builder::build_tree(source)?;
        Ok(Self {
            nodes,
            fingerprint: source.fingerprint()?,
        })
    }

    /// Build the tree from the dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_source(&RegionSource::bundled()?)
    }

    /// Top-level province nodes in source order.
    pub fn nodes(&self) -> &[RegionNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        count_nodes(&self.nodes)
    }

    /// SHA-256 of the dataset this tree was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when `source` is the dataset this tree was built from.
    pub fn is_built_from(&self, source: &RegionSource) -> Result<bool> {
        Ok(source.fingerprint()? == self.fingerprint)
    }

    pub fn find(&self, code: RegionCode) -> Option<&RegionNode> {
        find_node(&self.nodes, code)
    }

    pub fn label_of(&self, code: RegionCode) -> String {
        find_label_by_code(&self.nodes, code)
    }

    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a RegionNode),
    {
        walk(&self.nodes, &mut visit);
    }
}
