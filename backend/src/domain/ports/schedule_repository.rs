//! Port for watering schedule persistence.
//!
//! The store enforces one schedule per user/crop pair. Creating a schedule
//! copies the crop's cadence template; confirming a watering advances
//! `next_watering` by the schedule's own frequency.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::user::UserId;
use crate::domain::watering::{OverdueSchedule, ScheduleView};

use super::define_port_error;

define_port_error! {
    /// Errors raised by schedule repository adapters.
    pub enum ScheduleRepositoryError {
        Connection { message: String } =>
            "schedule repository connection failed: {message}",
        Query { message: String } =>
            "schedule repository query failed: {message}",
        /// The referenced account does not exist.
        UserMissing { user_id: i32 } =>
            "no user with id {user_id}",
        /// The named crop is not in the catalog.
        CropMissing { name: String } =>
            "no crop named {name}",
        /// The crop has no cadence template to copy.
        TemplateMissing { name: String } =>
            "no schedule template for crop {name}",
    }
}

/// Result of creating a schedule for a crop.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleCreateOutcome {
    Created(ScheduleView),
    /// A schedule for this pair already exists; nothing changed.
    AlreadyScheduled,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Create a schedule from the crop's template. A never-watered schedule
    /// is due on `today`.
    async fn create_for_crop(
        &self,
        user_id: UserId,
        crop_name: &str,
        today: NaiveDate,
    ) -> Result<ScheduleCreateOutcome, ScheduleRepositoryError>;

    /// Record a watering on `today` and return the new next-watering date.
    /// `None` when no schedule exists for the pair. Only the dates change;
    /// the schedule is listed overdue again once the new date passes.
    async fn record_watering(
        &self,
        user_id: UserId,
        crop_name: &str,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, ScheduleRepositoryError>;

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScheduleView>, ScheduleRepositoryError>;

    /// Delete the schedule for a pair. Returns `false` when it was absent.
    async fn delete(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<bool, ScheduleRepositoryError>;

    /// Unconfirmed schedules (`water_status = false`) whose `next_watering`
    /// is on or before `today`, joined with the crop name, for the overdue
    /// sweep.
    async fn list_overdue(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<OverdueSchedule>, ScheduleRepositoryError>;
}
