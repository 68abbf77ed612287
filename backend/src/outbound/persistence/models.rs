//! Row types mapping between the store schema and domain values.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::crop::{Crop, CropAttributes, CropId, CropScheduleTemplate};
use crate::domain::notifications::{Notification, NotificationPreferences};
use crate::domain::user::{AuthRecord, Location, User, UserId};
use crate::domain::watering::WateringSchedule;

use super::schema::{
    crop_schedule_templates, crops, notification_preferences, notifications, users,
    verification_tokens, watering_schedules,
};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl UserRow {
    pub fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: Location {
                city: self.location_city,
                state: self.location_state,
                country: self.location_country,
                latitude: self.location_latitude,
                longitude: self.location_longitude,
            },
        }
    }

    pub fn into_auth_record(self) -> AuthRecord {
        let password_hash = self.password_hash.clone();
        AuthRecord {
            user: self.into_user(),
            password_hash,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = crops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CropRow {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub growing_conditions: Option<String>,
    pub planting_info: Option<String>,
    pub care_instructions: Option<String>,
    pub storage_info: Option<String>,
    pub nutritional_info: Option<String>,
    pub culinary_info: Option<String>,
    pub sunlight: String,
    pub water_needs: String,
    pub min_area_sq_m: f64,
    pub soil_type: String,
    pub drainage: String,
    pub potted: bool,
    pub companion_crop_1: Option<String>,
    pub companion_crop_2: Option<String>,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub max_humidity_pct: f64,
    pub grow_from_month: i32,
    pub grow_to_month: i32,
}

impl CropRow {
    pub fn into_crop(self) -> Crop {
        let attributes = CropAttributes {
            crop_name: self.name.clone(),
            sunlight: self.sunlight,
            water_needs: self.water_needs,
            min_area_sq_m: self.min_area_sq_m,
            soil_type: self.soil_type,
            drainage: self.drainage,
            potted: self.potted,
            companion_crop_1: self.companion_crop_1,
            companion_crop_2: self.companion_crop_2,
            min_temp_c: self.min_temp_c,
            max_temp_c: self.max_temp_c,
            max_humidity_pct: self.max_humidity_pct,
            grow_from_month: month(self.grow_from_month),
            grow_to_month: month(self.grow_to_month),
        };
        Crop {
            id: CropId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            scientific_name: self.scientific_name,
            description: self.description,
            origin: self.origin,
            growing_conditions: self.growing_conditions,
            planting_info: self.planting_info,
            care_instructions: self.care_instructions,
            storage_info: self.storage_info,
            nutritional_info: self.nutritional_info,
            culinary_info: self.culinary_info,
            attributes,
        }
    }

    pub fn into_attributes(self) -> CropAttributes {
        self.into_crop().attributes
    }
}

fn month(raw: i32) -> u32 {
    u32::try_from(raw.clamp(1, 12)).unwrap_or(1)
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crops)]
pub struct NewCropRow {
    pub name: String,
    pub image_url: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub growing_conditions: Option<String>,
    pub planting_info: Option<String>,
    pub care_instructions: Option<String>,
    pub storage_info: Option<String>,
    pub nutritional_info: Option<String>,
    pub culinary_info: Option<String>,
    pub sunlight: String,
    pub water_needs: String,
    pub min_area_sq_m: f64,
    pub soil_type: String,
    pub drainage: String,
    pub potted: bool,
    pub companion_crop_1: Option<String>,
    pub companion_crop_2: Option<String>,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub max_humidity_pct: f64,
    pub grow_from_month: i32,
    pub grow_to_month: i32,
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = crop_schedule_templates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TemplateRow {
    pub crop_name: String,
    pub growing_time: i32,
    pub watering_frequency: i32,
    pub fertilization_schedule: i32,
}

impl TemplateRow {
    pub fn into_template(self) -> CropScheduleTemplate {
        CropScheduleTemplate {
            crop_name: self.crop_name,
            growing_time: self.growing_time,
            watering_frequency: self.watering_frequency,
            fertilization_schedule: self.fertilization_schedule,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = watering_schedules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScheduleRow {
    pub id: i32,
    pub user_id: i32,
    pub crop_id: i32,
    pub last_watered: Option<NaiveDate>,
    pub next_watering: NaiveDate,
    pub watering_frequency: i32,
    pub fertilization_schedule: i32,
    pub water_status: bool,
    pub created_at: NaiveDateTime,
}

impl ScheduleRow {
    pub fn into_schedule(self) -> WateringSchedule {
        WateringSchedule {
            id: self.id,
            user_id: UserId::new(self.user_id),
            crop_id: CropId::new(self.crop_id),
            last_watered: self.last_watered,
            next_watering: self.next_watering,
            watering_frequency: self.watering_frequency,
            fertilization_schedule: self.fertilization_schedule,
            water_status: self.water_status,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = watering_schedules)]
pub struct NewScheduleRow {
    pub user_id: i32,
    pub crop_id: i32,
    pub last_watered: Option<NaiveDate>,
    pub next_watering: NaiveDate,
    pub watering_frequency: i32,
    pub fertilization_schedule: i32,
    pub water_status: bool,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationRow {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read_status: bool,
}

impl NotificationRow {
    pub fn into_notification(self) -> Notification {
        Notification {
            id: self.id,
            user_id: UserId::new(self.user_id),
            message: self.message,
            timestamp: self.timestamp,
            read_status: self.read_status,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotificationRow {
    pub user_id: i32,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read_status: bool,
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = notification_preferences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PreferencesRow {
    pub user_id: i32,
    pub watering_reminders: bool,
    pub weather_alerts: bool,
}

impl PreferencesRow {
    pub fn into_preferences(self) -> NotificationPreferences {
        NotificationPreferences {
            watering_reminders: self.watering_reminders,
            weather_alerts: self.weather_alerts,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = verification_tokens)]
pub struct NewVerificationTokenRow {
    pub user_id: i32,
    pub token: String,
}
