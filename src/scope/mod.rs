pub mod extract;
pub mod filter;
pub mod oracle;
pub mod select;

pub use extract::extract_scope;
pub use filter::AreaFilter;
pub use oracle::is_within_scope;
pub use select::{
    city_options, district_options, province_options, validate_area_permission, AreaOption,
};

use serde::{Deserialize, Serialize};

use crate::error::{RegionScopeError, Result};
use crate::region::{count_nodes, find_node, RegionCode, RegionNode};

/// What an administrator's authority is anchored to, broadest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeLevel {
    Unrestricted,
    Province,
    City,
    District,
}

impl std::fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeLevel::Unrestricted => write!(f, "unrestricted"),
            ScopeLevel::Province => write!(f, "province"),
            ScopeLevel::City => write!(f, "city"),
            ScopeLevel::District => write!(f, "district"),
        }
    }
}

impl std::str::FromStr for ScopeLevel {
    type Err = RegionScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unrestricted" => Ok(ScopeLevel::Unrestricted),
            "province" => Ok(ScopeLevel::Province),
            "city" => Ok(ScopeLevel::City),
            "district" => Ok(ScopeLevel::District),
            _ => Err(RegionScopeError::UnknownScopeLevel {
                value: s.to_string(),
            }),
        }
    }
}

/// An admin's permission scope: a level plus the code anchoring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeDescriptor {
    pub level: ScopeLevel,
    /// Ignored when `level` is [`ScopeLevel::Unrestricted`].
    pub code: RegionCode,
}

impl ScopeDescriptor {
    pub fn new(level: ScopeLevel, code: RegionCode) -> Self {
        Self { level, code }
    }

    pub fn unrestricted() -> Self {
        Self::new(ScopeLevel::Unrestricted, RegionCode::NO_MATCH)
    }

    pub fn province(code: RegionCode) -> Self {
        Self::new(ScopeLevel::Province, code)
    }

    pub fn city(code: RegionCode) -> Self {
        Self::new(ScopeLevel::City, code)
    }

    pub fn district(code: RegionCode) -> Self {
        Self::new(ScopeLevel::District, code)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.level == ScopeLevel::Unrestricted
    }
}

impl std::fmt::Display for ScopeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unrestricted() {
            write!(f, "unrestricted")
        } else {
            write!(f, "{}:{}", self.level, self.code)
        }
    }
}

/// The part of the region tree one admin may see.
///
/// Empty means "no accessible regions"; it never stands for full access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeSubtree {
    nodes: Vec<RegionNode>,
}

impl ScopeSubtree {
    pub const EMPTY: ScopeSubtree = ScopeSubtree { nodes: Vec::new() };

    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_nodes(nodes: Vec<RegionNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[RegionNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        count_nodes(&self.nodes)
    }

    /// True if any node in the subtree, the anchor included, carries `code`.
    pub fn contains(&self, code: RegionCode) -> bool {
        find_node(&self.nodes, code).is_some()
    }

    /// Turn an empty subtree into an [`RegionScopeError::UnresolvedScope`].
    pub fn require_accessible(&self, descriptor: &ScopeDescriptor) -> Result<&Self> {
        if self.is_empty() {
            return Err(RegionScopeError::UnresolvedScope {
                level: descriptor.level,
                code: descriptor.code,
            });
        }
        Ok(self)
    }
}
