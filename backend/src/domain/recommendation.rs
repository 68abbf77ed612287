//! Rule-based crop recommendation.
//!
//! A pure filter over the catalog attribute table: categorical attributes
//! match case-insensitively, numeric inputs must fall inside each crop's
//! tolerances, and the query month must sit inside the growing window. No
//! ranking; results keep catalog order.

use serde::Deserialize;
use utoipa::ToSchema;

use super::crop::CropAttributes;

/// Environmental inputs for one recommendation query.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    /// Categorical sunlight level, matched case-insensitively ("full", "Full").
    pub sunlight: String,
    /// Categorical water requirement, matched case-insensitively.
    pub water_needs: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub area_sq_m: f64,
    /// Calendar month, 1-12.
    pub month: u32,
}

/// Filter the catalog down to crops matching the query.
pub fn recommend<'a>(
    catalog: &'a [CropAttributes],
    query: &RecommendationQuery,
) -> Vec<&'a CropAttributes> {
    catalog
        .iter()
        .filter(|crop| matches(crop, query))
        .collect()
}

fn matches(crop: &CropAttributes, query: &RecommendationQuery) -> bool {
    crop.sunlight.eq_ignore_ascii_case(query.sunlight.trim())
        && crop.water_needs.eq_ignore_ascii_case(query.water_needs.trim())
        && (crop.min_temp_c..=crop.max_temp_c).contains(&query.temperature_c)
        && query.humidity_pct <= crop.max_humidity_pct
        && query.area_sq_m >= crop.min_area_sq_m
        && month_in_window(crop.grow_from_month, crop.grow_to_month, query.month)
}

/// True when `month` lies inside the inclusive window `[from, to]`, where the
/// window may wrap the year end (e.g. October through February).
pub fn month_in_window(from: u32, to: u32, month: u32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    if from <= to {
        (from..=to).contains(&month)
    } else {
        month >= from || month <= to
    }
}
