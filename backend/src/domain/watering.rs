//! Watering schedule reconciliation.
//!
//! The reconciler derives `next_watering` from `last_watered` plus the crop's
//! watering frequency. A schedule that has never been watered is due today.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::crop::CropId;
use super::user::UserId;

/// A per-user, per-crop watering cadence record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WateringSchedule {
    pub id: i32,
    pub user_id: UserId,
    pub crop_id: CropId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<NaiveDate>,
    pub next_watering: NaiveDate,
    pub watering_frequency: i32,
    pub fertilization_schedule: i32,
    pub water_status: bool,
}

/// Schedule row joined with catalog data for the schedule listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub crop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<NaiveDate>,
    pub next_watering: NaiveDate,
    pub growing_time: i32,
    pub watering_frequency: i32,
    pub fertilization_schedule: i32,
}

/// Overdue schedule selected by the background sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueSchedule {
    pub user_id: UserId,
    pub crop_name: String,
    pub next_watering: NaiveDate,
}

/// Compute the next watering date for a schedule.
///
/// `next_watering = last_watered + frequency` days; a schedule that has never
/// been watered is due `today`. Frequencies below one day are clamped to one.
pub fn next_watering_date(
    last_watered: Option<NaiveDate>,
    frequency_days: i32,
    today: NaiveDate,
) -> NaiveDate {
    let frequency = u64::from(frequency_days.max(1).unsigned_abs());
    match last_watered {
        Some(last) => last.checked_add_days(Days::new(frequency)).unwrap_or(last),
        None => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[rstest]
    #[case(date(2026, 8, 20), 7, date(2026, 8, 27))]
    #[case(date(2026, 8, 27), 1, date(2026, 8, 28))]
    #[case(date(2026, 12, 30), 3, date(2027, 1, 2))]
    #[case(date(2024, 2, 28), 2, date(2024, 3, 1))]
    fn next_watering_adds_frequency_days(
        #[case] last: NaiveDate,
        #[case] frequency: i32,
        #[case] expected: NaiveDate,
    ) {
        let today = date(2026, 8, 27);
        assert_eq!(next_watering_date(Some(last), frequency, today), expected);
    }

    #[test]
    fn absent_last_watered_is_due_today() {
        let today = date(2026, 8, 27);
        assert_eq!(next_watering_date(None, 7, today), today);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn frequency_is_clamped_to_one_day(#[case] frequency: i32) {
        let last = date(2026, 8, 26);
        let today = date(2026, 8, 27);
        assert_eq!(
            next_watering_date(Some(last), frequency, today),
            date(2026, 8, 27)
        );
    }
}
