use serde::{Deserialize, Serialize};

use crate::region::RegionCode;
use crate::scope::ScopeLevel;

/// What the identity collaborator tells us about a logged-in admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    #[serde(alias = "userName")]
    pub user_name: String,

    /// Legacy page-level user type; one value marks the super-admin.
    #[serde(default, alias = "userType")]
    pub user_type: Option<u8>,

    /// Legacy numeric admin tier, translated through the tier table.
    #[serde(default, alias = "adminLevel")]
    pub admin_level: Option<u8>,

    /// Explicit scope level; takes precedence over `admin_level`.
    #[serde(default)]
    pub scope_level: Option<ScopeLevel>,

    /// Pre-resolved home region. When absent the names below are resolved.
    #[serde(default)]
    pub region_code: Option<RegionCode>,

    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub department: String,
}

/// Display-oriented digest of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub user_type: Option<u8>,
    pub admin_level: Option<u8>,
    pub address: String,
    pub department: String,
}

impl AdminIdentity {
    /// Identity with only a user name; no authority.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Identity located by region names.
    pub fn with_region(mut self, province: &str, city: &str, district: &str) -> Self {
        self.province = province.to_string();
        self.city = city.to_string();
        self.district = district.to_string();
        self
    }

    /// Non-empty province, city and district names joined by spaces.
    pub fn full_address(&self) -> String {
        [&self.province, &self.city, &self.district]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn summary(&self) -> AdminSummary {
        AdminSummary {
            user_type: self.user_type,
            admin_level: self.admin_level,
            address: self.full_address(),
            department: self.department.clone(),
        }
    }
}
