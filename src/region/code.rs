use serde::{Deserialize, Serialize};

use super::RegionLevel;
use crate::error::{RegionScopeError, Result};

/// Highest ordinal that fits in a two-digit code segment.
pub const MAX_ORDINAL: usize = 99;

/// Six-digit region code: `pp` province ordinal, `cc` city ordinal within the
/// province, `dd` district ordinal within the city. Unused segments are `00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode {
    province: u8,
    city: u8,
    district: u8,
}

impl RegionCode {
    /// Sentinel returned when a lookup matches nothing: `000000`.
    pub const NO_MATCH: RegionCode = RegionCode {
        province: 0,
        city: 0,
        district: 0,
    };

    pub fn province(ordinal: usize) -> Result<Self> {
        Ok(Self {
            province: segment(ordinal)?,
            city: 0,
            district: 0,
        })
    }

    /// Code of the `ordinal`-th city under this province code.
    pub fn city(self, ordinal: usize) -> Result<Self> {
        Ok(Self {
            province: self.province,
            city: segment(ordinal)?,
            district: 0,
        })
    }

    /// Code of the `ordinal`-th district under this city code.
    pub fn district(self, ordinal: usize) -> Result<Self> {
        Ok(Self {
            province: self.province,
            city: self.city,
            district: segment(ordinal)?,
        })
    }

    /// The owning province code (`pp0000`).
    pub fn province_code(self) -> Self {
        Self {
            province: self.province,
            city: 0,
            district: 0,
        }
    }

    /// The owning city code (`ppcc00`). For a province code this is the code itself.
    pub fn city_code(self) -> Self {
        Self {
            province: self.province,
            city: self.city,
            district: 0,
        }
    }

    pub fn is_no_match(self) -> bool {
        self == Self::NO_MATCH
    }

    /// The level this code's shape denotes. `None` for the sentinel and for
    /// shapes no node can carry (e.g. `010001`).
    pub fn level(self) -> Option<RegionLevel> {
        match (self.province, self.city, self.district) {
            (0, _, _) => None,
            (_, 0, 0) => Some(RegionLevel::Province),
            (_, 0, _) => None,
            (_, _, 0) => Some(RegionLevel::City),
            _ => Some(RegionLevel::District),
        }
    }
}

fn segment(ordinal: usize) -> Result<u8> {
    if ordinal == 0 || ordinal > MAX_ORDINAL {
        return Err(RegionScopeError::MalformedSourceData {
            reason: format!("ordinal {ordinal} does not fit a two-digit code segment (1..={MAX_ORDINAL})"),
        });
    }
    Ok(ordinal as u8)
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.province, self.city, self.district)
    }
}

impl std::str::FromStr for RegionCode {
    type Err = RegionScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(RegionScopeError::InvalidRegionCode {
                value: s.to_string(),
            });
        }
        let pair = |i: usize| (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
        Ok(Self {
            province: pair(0),
            city: pair(2),
            district: pair(4),
        })
    }
}

impl TryFrom<String> for RegionCode {
    type Error = RegionScopeError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.to_string()
    }
}
