pub mod context;
pub mod registry;

pub use context::{AdminIdentity, AdminSummary};
pub use registry::SessionRegistry;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::AuthorityPolicy;
use crate::region::{self, RegionCode, RegionNode, RegionTree};
use crate::scope::{self, extract_scope, ScopeDescriptor, ScopeSubtree};

static EMPTY_SUBTREE: ScopeSubtree = ScopeSubtree::EMPTY;

/// Scope state derived for one logged-in admin.
#[derive(Debug, Clone)]
struct ScopeState {
    identity: AdminIdentity,
    descriptor: Option<ScopeDescriptor>,
    subtree: ScopeSubtree,
    populated_at: DateTime<Utc>,
}

/// Per-session holder of the admin's scope and the subtree derived from it.
///
/// Starts empty, is populated by [`ScopeCache::on_login`] and emptied by
/// [`ScopeCache::on_logout`]. Every read while empty denies access.
#[derive(Debug, Clone)]
pub struct ScopeCache {
    tree: Arc<RegionTree>,
    policy: AuthorityPolicy,
    state: Option<ScopeState>,
    selected: Option<RegionNode>,
}

impl ScopeCache {
    pub fn new(tree: Arc<RegionTree>, policy: AuthorityPolicy) -> Self {
        Self {
            tree,
            policy,
            state: None,
            selected: None,
        }
    }

    /// Derive and store the scope for a freshly authenticated admin.
    pub fn on_login(&mut self, identity: AdminIdentity) -> &ScopeSubtree {
        let state = self.derive(identity);
        tracing::debug!(
            "session for '{}' scoped to {:?} ({} node(s))",
            state.identity.user_name,
            state.descriptor.map(|d| d.to_string()),
            state.subtree.node_count()
        );
        self.selected = None;
        &self.state.insert(state).subtree
    }

    /// Recompute the scope from the stored identity.
    pub fn refresh(&mut self) -> &ScopeSubtree {
        if let Some(identity) = self.state.take().map(|s| s.identity) {
            let state = self.derive(identity);
            self.state = Some(state);
            // Re-read the selection from the new subtree; a rebuilt tree may
            // relabel or drop the node behind the same code.
            self.selected = self
                .selected
                .take()
                .and_then(|n| region::find_node(self.scoped_tree().nodes(), n.code).cloned());
        }
        self.scoped_tree()
    }

    /// Swap in a rebuilt full tree and recompute the scope against it.
    pub fn rebind(&mut self, tree: Arc<RegionTree>) -> &ScopeSubtree {
        self.tree = tree;
        self.refresh()
    }

    pub fn on_logout(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::debug!("session for '{}' cleared", state.identity.user_name);
        }
        self.selected = None;
    }

    pub fn is_populated(&self) -> bool {
        self.state.is_some()
    }

    pub fn identity(&self) -> Option<&AdminIdentity> {
        self.state.as_ref().map(|s| &s.identity)
    }

    pub fn descriptor(&self) -> Option<&ScopeDescriptor> {
        self.state.as_ref().and_then(|s| s.descriptor.as_ref())
    }

    pub fn populated_at(&self) -> Option<DateTime<Utc>> {
        self.state.as_ref().map(|s| s.populated_at)
    }

    pub fn full_tree(&self) -> &RegionTree {
        &self.tree
    }

    /// The current admin's visible subtree; empty before login.
    pub fn scoped_tree(&self) -> &ScopeSubtree {
        self.state
            .as_ref()
            .map(|s| &s.subtree)
            .unwrap_or(&EMPTY_SUBTREE)
    }

    pub fn is_within_scope(&self, code: RegionCode) -> bool {
        match self.descriptor() {
            Some(d) if d.is_unrestricted() => true,
            Some(_) => self.scoped_tree().contains(code),
            None => false,
        }
    }

    pub fn validate_area_permission(&self, province: &str, city: &str, district: &str) -> bool {
        scope::validate_area_permission(self.scoped_tree(), province, city, district)
    }

    pub fn resolve_code(&self, province: &str, city: &str, district: &str) -> RegionCode {
        region::resolve_code(self.tree.nodes(), province, city, district)
    }

    pub fn find_label_by_code(&self, code: RegionCode) -> String {
        self.tree.label_of(code)
    }

    /// Mark an area as selected. Only areas inside the scope can be selected.
    pub fn select(&mut self, code: RegionCode) -> bool {
        match region::find_node(self.scoped_tree().nodes(), code) {
            Some(node) => {
                self.selected = Some(node.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&RegionNode> {
        self.selected.as_ref()
    }

    fn derive(&self, identity: AdminIdentity) -> ScopeState {
        let code = identity.region_code.unwrap_or_else(|| {
            region::resolve_code(
                self.tree.nodes(),
                &identity.province,
                &identity.city,
                &identity.district,
            )
        });
        let descriptor = self.policy.descriptor_for(&identity, code);
        let subtree = descriptor
            .map(|d| extract_scope(self.tree.nodes(), &d))
            .unwrap_or_default();

        ScopeState {
            identity,
            descriptor,
            subtree,
            populated_at: Utc::now(),
        }
    }
}
