//! Startup seeding for the crop catalog.
//!
//! The catalog is reference data, not user data: on a fresh database the
//! crops and their cadence templates are inserted once. A non-empty catalog
//! is left untouched so operators can curate it.

use diesel::prelude::*;
use tracing::info;

use super::models::{NewCropRow, TemplateRow};
use super::schema::{crop_schedule_templates, crops};

struct SeedCrop {
    name: &'static str,
    description: &'static str,
    sunlight: &'static str,
    water_needs: &'static str,
    min_area_sq_m: f64,
    soil_type: &'static str,
    drainage: &'static str,
    potted: bool,
    companions: (Option<&'static str>, Option<&'static str>),
    temp_range_c: (f64, f64),
    max_humidity_pct: f64,
    grow_months: (i32, i32),
    growing_time: i32,
    watering_frequency: i32,
    fertilization_schedule: i32,
}

const SEED_CROPS: &[SeedCrop] = &[
    SeedCrop {
        name: "Tomato",
        description: "Sun-loving vine grown for its fruit; needs staking once it sets.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.5,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Basil"), Some("Marigold")),
        temp_range_c: (15.0, 35.0),
        max_humidity_pct: 85.0,
        grow_months: (1, 12),
        growing_time: 70,
        watering_frequency: 2,
        fertilization_schedule: 14,
    },
    SeedCrop {
        name: "Spinach",
        description: "Fast leafy green that bolts in heat; harvest leaves young.",
        sunlight: "Partial",
        water_needs: "Medium",
        min_area_sq_m: 0.25,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Radish"), None),
        temp_range_c: (10.0, 27.0),
        max_humidity_pct: 90.0,
        grow_months: (10, 2),
        growing_time: 40,
        watering_frequency: 2,
        fertilization_schedule: 21,
    },
    SeedCrop {
        name: "Carrot",
        description: "Root crop needing loose, stone-free soil for straight roots.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.25,
        soil_type: "Sandy",
        drainage: "Well-drained",
        potted: false,
        companions: (Some("Onion"), None),
        temp_range_c: (10.0, 30.0),
        max_humidity_pct: 85.0,
        grow_months: (9, 2),
        growing_time: 75,
        watering_frequency: 3,
        fertilization_schedule: 28,
    },
    SeedCrop {
        name: "Basil",
        description: "Aromatic herb that thrives in warmth; pinch tips to keep it bushy.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.1,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Tomato"), None),
        temp_range_c: (18.0, 35.0),
        max_humidity_pct: 85.0,
        grow_months: (2, 11),
        growing_time: 30,
        watering_frequency: 2,
        fertilization_schedule: 21,
    },
    SeedCrop {
        name: "Chilli Pepper",
        description: "Compact fruiting plant; heat improves flavour and yield.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.3,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Basil"), None),
        temp_range_c: (18.0, 38.0),
        max_humidity_pct: 80.0,
        grow_months: (1, 12),
        growing_time: 80,
        watering_frequency: 2,
        fertilization_schedule: 14,
    },
    SeedCrop {
        name: "Cucumber",
        description: "Sprawling vine; steady water prevents bitter fruit.",
        sunlight: "Full",
        water_needs: "High",
        min_area_sq_m: 1.0,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: false,
        companions: (Some("Beans"), None),
        temp_range_c: (18.0, 35.0),
        max_humidity_pct: 90.0,
        grow_months: (2, 10),
        growing_time: 55,
        watering_frequency: 1,
        fertilization_schedule: 14,
    },
    SeedCrop {
        name: "Okra",
        description: "Heat-tolerant pod crop; pick pods young and often.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.5,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: false,
        companions: (None, None),
        temp_range_c: (20.0, 40.0),
        max_humidity_pct: 90.0,
        grow_months: (2, 9),
        growing_time: 60,
        watering_frequency: 2,
        fertilization_schedule: 21,
    },
    SeedCrop {
        name: "Mint",
        description: "Vigorous spreading herb; confine to a pot or it takes over.",
        sunlight: "Partial",
        water_needs: "High",
        min_area_sq_m: 0.1,
        soil_type: "Loamy",
        drainage: "Moist",
        potted: true,
        companions: (None, None),
        temp_range_c: (10.0, 32.0),
        max_humidity_pct: 95.0,
        grow_months: (1, 12),
        growing_time: 30,
        watering_frequency: 1,
        fertilization_schedule: 28,
    },
    SeedCrop {
        name: "Brinjal",
        description: "Warm-season fruiting crop related to tomato; heavy feeder.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.5,
        soil_type: "Loamy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Beans"), None),
        temp_range_c: (18.0, 36.0),
        max_humidity_pct: 85.0,
        grow_months: (1, 12),
        growing_time: 80,
        watering_frequency: 2,
        fertilization_schedule: 14,
    },
    SeedCrop {
        name: "Radish",
        description: "The quickest root crop; ready in under a month.",
        sunlight: "Full",
        water_needs: "Medium",
        min_area_sq_m: 0.2,
        soil_type: "Sandy",
        drainage: "Well-drained",
        potted: true,
        companions: (Some("Spinach"), None),
        temp_range_c: (10.0, 28.0),
        max_humidity_pct: 85.0,
        grow_months: (9, 3),
        growing_time: 25,
        watering_frequency: 2,
        fertilization_schedule: 0,
    },
];

impl SeedCrop {
    fn crop_row(&self) -> NewCropRow {
        NewCropRow {
            name: self.name.to_owned(),
            image_url: None,
            scientific_name: None,
            description: Some(self.description.to_owned()),
            origin: None,
            growing_conditions: None,
            planting_info: None,
            care_instructions: None,
            storage_info: None,
            nutritional_info: None,
            culinary_info: None,
            sunlight: self.sunlight.to_owned(),
            water_needs: self.water_needs.to_owned(),
            min_area_sq_m: self.min_area_sq_m,
            soil_type: self.soil_type.to_owned(),
            drainage: self.drainage.to_owned(),
            potted: self.potted,
            companion_crop_1: self.companions.0.map(str::to_owned),
            companion_crop_2: self.companions.1.map(str::to_owned),
            min_temp_c: self.temp_range_c.0,
            max_temp_c: self.temp_range_c.1,
            max_humidity_pct: self.max_humidity_pct,
            grow_from_month: self.grow_months.0,
            grow_to_month: self.grow_months.1,
        }
    }

    fn template_row(&self) -> TemplateRow {
        TemplateRow {
            crop_name: self.name.to_owned(),
            growing_time: self.growing_time,
            watering_frequency: self.watering_frequency,
            fertilization_schedule: self.fertilization_schedule,
        }
    }
}

/// Seed the catalog and templates when both are empty. Returns the number of
/// crops inserted (zero when the catalog was already populated).
pub fn seed_catalog_if_empty(
    conn: &mut SqliteConnection,
) -> Result<usize, diesel::result::Error> {
    conn.transaction(|conn| {
        let existing: i64 = crops::table.count().get_result(conn)?;
        if existing > 0 {
            return Ok(0);
        }

        let crop_rows: Vec<NewCropRow> = SEED_CROPS.iter().map(SeedCrop::crop_row).collect();
        let template_rows: Vec<TemplateRow> =
            SEED_CROPS.iter().map(SeedCrop::template_row).collect();
        diesel::insert_into(crops::table)
            .values(&crop_rows)
            .execute(conn)?;
        diesel::insert_into(crop_schedule_templates::table)
            .values(&template_rows)
            .execute(conn)?;

        info!(crops = SEED_CROPS.len(), "seeded crop catalog");
        Ok(SEED_CROPS.len())
    })
}
