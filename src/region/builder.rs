use super::{RegionCode, RegionLevel, RegionNode, RegionSource};
use crate::error::{RegionScopeError, Result};

/// Build the three-level region tree from a flat dataset.
///
/// Ordinals are 1-based, assigned in source iteration order and reset under
/// every parent. A province with no cities, a blank label or more than 99
/// siblings at any level is rejected. Cities without districts are kept as
/// leaves.
pub fn build_tree(source: &RegionSource) -> Result<Vec<RegionNode>> {
    let mut provinces = Vec::with_capacity(source.province_count());

    for (p_idx, (province_name, cities)) in source.provinces().enumerate() {
        check_label(province_name, RegionLevel::Province)?;
        if cities.is_empty() {
            return Err(RegionScopeError::MalformedSourceData {
                reason: format!("province '{province_name}' has no cities"),
            });
        }

        let province_code = RegionCode::province(p_idx + 1)?;
        let mut city_nodes = Vec::with_capacity(cities.len());

        for (c_idx, (city_name, districts)) in cities.iter().enumerate() {
            check_label(city_name, RegionLevel::City)?;
            let city_code = province_code.city(c_idx + 1)?;

            if districts.is_empty() {
                tracing::warn!(
                    "city '{}' ({}) in province '{}' has no districts",
                    city_name,
                    city_code,
                    province_name
                );
            }

            let mut district_nodes = Vec::with_capacity(districts.len());
            for (d_idx, district_name) in districts.iter().enumerate() {
                check_label(district_name, RegionLevel::District)?;
                district_nodes.push(RegionNode {
                    label: district_name.clone(),
                    code: city_code.district(d_idx + 1)?,
                    level: RegionLevel::District,
                    children: Vec::new(),
                });
            }

            city_nodes.push(RegionNode {
                label: city_name.clone(),
                code: city_code,
                level: RegionLevel::City,
                children: district_nodes,
            });
        }

        provinces.push(RegionNode {
            label: province_name.clone(),
            code: province_code,
            level: RegionLevel::Province,
            children: city_nodes,
        });
    }

    tracing::debug!("built region tree with {} province(s)", provinces.len());
    Ok(provinces)
}

fn check_label(label: &str, level: RegionLevel) -> Result<()> {
    if label.trim().is_empty() {
        return Err(RegionScopeError::MalformedSourceData {
            reason: format!("blank {level} label"),
        });
    }
    Ok(())
}
