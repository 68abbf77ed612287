//! Crop catalog data model.
//!
//! The catalog is seeded once and read-only at runtime. Descriptive fields
//! feed the crop-details endpoints; the matching attributes feed the
//! recommendation evaluator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog crop identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32)]
pub struct CropId(i32);

impl CropId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Full catalog entry with descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growing_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culinary_info: Option<String>,
    pub attributes: CropAttributes,
}

/// Matching attributes used by the recommendation evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropAttributes {
    pub crop_name: String,
    /// Categorical sunlight requirement, e.g. "Full" or "Partial".
    pub sunlight: String,
    /// Categorical water requirement, e.g. "Low", "Medium", "High".
    pub water_needs: String,
    /// Minimum growing area in square metres.
    pub min_area_sq_m: f64,
    pub soil_type: String,
    pub drainage: String,
    pub potted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion_crop_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion_crop_2: Option<String>,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub max_humidity_pct: f64,
    /// First month of the growing window (1-12).
    pub grow_from_month: u32,
    /// Last month of the growing window (1-12); may be before
    /// `grow_from_month` when the window wraps the year end.
    pub grow_to_month: u32,
}

impl CropAttributes {
    /// Companion crops with empty slots filtered out.
    pub fn companions(&self) -> Vec<String> {
        [&self.companion_crop_1, &self.companion_crop_2]
            .into_iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Per-crop cadence template used when a user adds a crop to their garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropScheduleTemplate {
    pub crop_name: String,
    /// Days from planting to harvest.
    pub growing_time: i32,
    /// Days between waterings; always at least one.
    pub watering_frequency: i32,
    /// Days between fertilizer applications.
    pub fertilization_schedule: i32,
}
