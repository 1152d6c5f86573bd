use serde::{Deserialize, Serialize};

use crate::region::{RegionLevel, RegionNode};

/// Search filter narrowing record lists to one province, city or district.
/// At most one field is set at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaFilter {
    pub province: String,
    pub city: String,
    pub district: String,
}

impl AreaFilter {
    /// Filter on the area a user picked, classified by its code shape.
    pub fn from_node(node: &RegionNode) -> Self {
        let mut filter = Self::default();
        filter.apply(node);
        filter
    }

    /// Replace the current filter with one on `node`.
    pub fn apply(&mut self, node: &RegionNode) {
        self.clear();
        let label = node.label.clone();
        match node.code.level().unwrap_or(node.level) {
            RegionLevel::Province => self.province = label,
            RegionLevel::City => self.city = label,
            RegionLevel::District => self.district = label,
        }
        tracing::debug!("area filter set to {:?}", self);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.province.is_empty() && self.city.is_empty() && self.district.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionCode;

    fn node(label: &str, code: &str, level: RegionLevel) -> RegionNode {
        RegionNode {
            label: label.into(),
            code: code.parse::<RegionCode>().unwrap(),
            level,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_classified_by_code() {
        let p = AreaFilter::from_node(&node("Jiangsu", "010000", RegionLevel::Province));
        assert_eq!(p.province, "Jiangsu");
        assert!(p.city.is_empty() && p.district.is_empty());

        let c = AreaFilter::from_node(&node("Changzhou", "010100", RegionLevel::City));
        assert_eq!(c.city, "Changzhou");
        assert!(c.province.is_empty());

        let d = AreaFilter::from_node(&node("Xinbei", "010101", RegionLevel::District));
        assert_eq!(d.district, "Xinbei");
    }

    #[test]
    fn test_apply_replaces_previous() {
        let mut f = AreaFilter::from_node(&node("Jiangsu", "010000", RegionLevel::Province));
        f.apply(&node("Xinbei", "010101", RegionLevel::District));
        assert!(f.province.is_empty());
        assert_eq!(f.district, "Xinbei");
        f.clear();
        assert!(f.is_empty());
    }
}
