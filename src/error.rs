use std::path::PathBuf;

use crate::region::RegionCode;
use crate::scope::ScopeLevel;

#[derive(Debug, thiserror::Error)]
pub enum RegionScopeError {
    #[error("malformed region source data: {reason}")]
    MalformedSourceData { reason: String },

    #[error("scope {level} anchored at {code} does not resolve to any region")]
    UnresolvedScope { level: ScopeLevel, code: RegionCode },

    #[error("invalid region code: {value:?} (expected six digits)")]
    InvalidRegionCode { value: String },

    #[error("unknown scope level: {value}")]
    UnknownScopeLevel { value: String },

    #[error("region source not found at {path}")]
    SourceNotFound { path: PathBuf },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegionScopeError>;
