//! Region trees and administrator permission scoping for the cabinet console.
//!
//! The full province/city/district tree is built once from a static dataset
//! ([`region::RegionSource`]) and shared read-only. Each admin session owns a
//! [`session::ScopeCache`] holding the subset of that tree the admin may act
//! within.

pub mod cli;
pub mod config;
pub mod error;
pub mod region;
pub mod scope;
pub mod session;

pub use error::{RegionScopeError, Result};
pub use region::{RegionCode, RegionLevel, RegionNode, RegionTree};
pub use scope::{ScopeDescriptor, ScopeLevel, ScopeSubtree};
pub use session::{AdminIdentity, ScopeCache, SessionRegistry};
