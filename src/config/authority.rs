use serde::{Deserialize, Serialize};

use crate::region::RegionCode;
use crate::scope::{ScopeDescriptor, ScopeLevel};
use crate::session::AdminIdentity;

/// Legacy numeric admin tiers and the scope level each one grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTable {
    pub province: u8,
    pub city: u8,
    pub district: u8,
    /// Tier that grants unrestricted scope, if any.
    #[serde(default)]
    pub unrestricted: Option<u8>,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            province: 1,
            city: 2,
            district: 3,
            unrestricted: None,
        }
    }
}

impl TierTable {
    /// Translate a numeric tier. Unknown tiers grant nothing.
    pub fn level_for(&self, tier: u8) -> Option<ScopeLevel> {
        if self.unrestricted == Some(tier) {
            Some(ScopeLevel::Unrestricted)
        } else if tier == self.province {
            Some(ScopeLevel::Province)
        } else if tier == self.city {
            Some(ScopeLevel::City)
        } else if tier == self.district {
            Some(ScopeLevel::District)
        } else {
            None
        }
    }
}

/// Turns an admin's identity fields into one canonical [`ScopeDescriptor`].
///
/// An explicit scope level wins over the numeric tier. The super-admin user
/// type, when honored, widens the result to unrestricted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityPolicy {
    #[serde(default)]
    pub tiers: TierTable,

    /// Treat `super_admin_user_type` as unrestricted. Default: true.
    #[serde(default = "default_honor_super_admin")]
    pub honor_super_admin: bool,

    /// Default: 2.
    #[serde(default = "default_super_admin_user_type")]
    pub super_admin_user_type: u8,
}

fn default_honor_super_admin() -> bool {
    true
}
fn default_super_admin_user_type() -> u8 {
    2
}

impl Default for AuthorityPolicy {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            honor_super_admin: true,
            super_admin_user_type: 2,
        }
    }
}

impl AuthorityPolicy {
    pub fn is_super_admin(&self, identity: &AdminIdentity) -> bool {
        self.honor_super_admin && identity.user_type == Some(self.super_admin_user_type)
    }

    /// The level granted by the identity's explicit level or numeric tier.
    pub fn granted_level(&self, identity: &AdminIdentity) -> Option<ScopeLevel> {
        identity
            .scope_level
            .or_else(|| identity.admin_level.and_then(|t| self.tiers.level_for(t)))
    }

    /// Scope for `identity` anchored at `code`. `None` when the identity
    /// carries no usable authority at all.
    pub fn descriptor_for(
        &self,
        identity: &AdminIdentity,
        code: RegionCode,
    ) -> Option<ScopeDescriptor> {
        let granted = self.granted_level(identity);

        if self.is_super_admin(identity) {
            if let Some(level) = granted.filter(|l| *l != ScopeLevel::Unrestricted) {
                tracing::warn!(
                    "user '{}' is super-admin but scoped to {}; using unrestricted",
                    identity.user_name,
                    level
                );
            }
            return Some(ScopeDescriptor::unrestricted());
        }

        match granted {
            Some(ScopeLevel::Unrestricted) => Some(ScopeDescriptor::unrestricted()),
            Some(level) => Some(ScopeDescriptor::new(level, code)),
            None => {
                tracing::warn!(
                    "user '{}' has no recognised scope level (admin_level={:?})",
                    identity.user_name,
                    identity.admin_level
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(user_type: Option<u8>, admin_level: Option<u8>) -> AdminIdentity {
        AdminIdentity {
            user_type,
            admin_level,
            ..AdminIdentity::new("alice")
        }
    }

    fn code() -> RegionCode {
        "010100".parse().unwrap()
    }

    #[test]
    fn test_default_tiers() {
        let tiers = TierTable::default();
        assert_eq!(tiers.level_for(1), Some(ScopeLevel::Province));
        assert_eq!(tiers.level_for(2), Some(ScopeLevel::City));
        assert_eq!(tiers.level_for(3), Some(ScopeLevel::District));
        assert_eq!(tiers.level_for(9), None);
    }

    #[test]
    fn test_tier_maps_to_descriptor() {
        let policy = AuthorityPolicy::default();
        let d = policy.descriptor_for(&admin(Some(1), Some(2)), code()).unwrap();
        assert_eq!(d, ScopeDescriptor::city(code()));
    }

    #[test]
    fn test_super_admin_overrides_tier() {
        let policy = AuthorityPolicy::default();
        let d = policy.descriptor_for(&admin(Some(2), Some(3)), code()).unwrap();
        assert!(d.is_unrestricted());
    }

    #[test]
    fn test_super_admin_ignored_when_disabled() {
        let policy = AuthorityPolicy {
            honor_super_admin: false,
            ..AuthorityPolicy::default()
        };
        let d = policy.descriptor_for(&admin(Some(2), Some(3)), code()).unwrap();
        assert_eq!(d.level, ScopeLevel::District);
    }

    #[test]
    fn test_explicit_level_beats_tier() {
        let policy = AuthorityPolicy::default();
        let mut identity = admin(None, Some(1));
        identity.scope_level = Some(ScopeLevel::District);
        let d = policy.descriptor_for(&identity, code()).unwrap();
        assert_eq!(d.level, ScopeLevel::District);
    }

    #[test]
    fn test_no_authority() {
        let policy = AuthorityPolicy::default();
        assert!(policy.descriptor_for(&admin(Some(1), None), code()).is_none());
        assert!(policy.descriptor_for(&admin(None, Some(7)), code()).is_none());
    }
}
