use dashmap::DashMap;
use std::sync::Arc;

use super::{AdminIdentity, ScopeCache};
use crate::config::AuthorityPolicy;
use crate::region::{RegionCode, RegionTree};
use crate::scope::ScopeSubtree;

/// Independent [`ScopeCache`]s for concurrent sessions sharing one process.
///
/// The full tree is shared read-only; scope state is never shared between
/// sessions. Unknown sessions see nothing.
pub struct SessionRegistry {
    tree: Arc<RegionTree>,
    policy: AuthorityPolicy,
    sessions: DashMap<String, ScopeCache>,
}

impl SessionRegistry {
    pub fn new(tree: Arc<RegionTree>, policy: AuthorityPolicy) -> Self {
        Self {
            tree,
            policy,
            sessions: DashMap::new(),
        }
    }

    /// Populate (or re-populate) the cache for `session_id`.
    pub fn login(&self, session_id: &str, identity: AdminIdentity) -> ScopeSubtree {
        let mut cache = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ScopeCache::new(Arc::clone(&self.tree), self.policy.clone()));
        cache.on_login(identity).clone()
    }

    pub fn logout(&self, session_id: &str) {
        if let Some((_, mut cache)) = self.sessions.remove(session_id) {
            cache.on_logout();
        }
    }

    pub fn refresh(&self, session_id: &str) -> ScopeSubtree {
        match self.sessions.get_mut(session_id) {
            Some(mut cache) => cache.refresh().clone(),
            None => ScopeSubtree::empty(),
        }
    }

    pub fn scoped_tree(&self, session_id: &str) -> ScopeSubtree {
        self.with_session(session_id, |c| c.scoped_tree().clone())
            .unwrap_or_default()
    }

    pub fn is_within_scope(&self, session_id: &str, code: RegionCode) -> bool {
        self.with_session(session_id, |c| c.is_within_scope(code))
            .unwrap_or(false)
    }

    /// Run `f` against a session's cache, if the session exists.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&ScopeCache) -> R) -> Option<R> {
        self.sessions.get(session_id).map(|c| f(c.value()))
    }

    pub fn full_tree(&self) -> &RegionTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
