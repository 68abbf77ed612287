//! Diesel-backed watering schedule repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::ports::{
    ScheduleCreateOutcome, ScheduleRepository, ScheduleRepositoryError,
};
use crate::domain::user::UserId;
use crate::domain::watering::{next_watering_date, OverdueSchedule, ScheduleView};

use super::functions::lower;
use super::models::{CropRow, NewScheduleRow, ScheduleRow, TemplateRow};
use super::pool::{DbPool, PoolError};
use super::schema::{crop_schedule_templates, crops, users, watering_schedules};

pub struct DieselScheduleRepository {
    pool: DbPool,
}

impl DieselScheduleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> ScheduleRepositoryError {
    match err {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            ScheduleRepositoryError::connection(message)
        }
        other => ScheduleRepositoryError::query(other.to_string()),
    }
}

fn crop_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<CropRow>, DieselError> {
    crops::table
        .filter(lower(crops::name).eq(name.trim().to_lowercase()))
        .select(CropRow::as_select())
        .first(conn)
        .optional()
}

enum CreateResult {
    Created(ScheduleView),
    AlreadyScheduled,
    UserMissing,
    CropMissing,
    TemplateMissing,
}

#[async_trait]
impl ScheduleRepository for DieselScheduleRepository {
    async fn create_for_crop(
        &self,
        user_id: UserId,
        crop_name: &str,
        today: NaiveDate,
    ) -> Result<ScheduleCreateOutcome, ScheduleRepositoryError> {
        let uid = user_id.get();
        let name = crop_name.to_owned();
        let name_for_error = crop_name.to_owned();
        let result = self
            .pool
            .run(move |conn| {
                conn.transaction(|conn| {
                    let user_count: i64 = users::table
                        .filter(users::id.eq(uid))
                        .count()
                        .get_result(conn)?;
                    if user_count == 0 {
                        return Ok(CreateResult::UserMissing);
                    }
                    let Some(crop) = crop_by_name(conn, &name)? else {
                        return Ok(CreateResult::CropMissing);
                    };
                    let template: Option<TemplateRow> = crop_schedule_templates::table
                        .find(&crop.name)
                        .select(TemplateRow::as_select())
                        .first(conn)
                        .optional()?;
                    let Some(template) = template else {
                        return Ok(CreateResult::TemplateMissing);
                    };

                    let row = NewScheduleRow {
                        user_id: uid,
                        crop_id: crop.id,
                        last_watered: None,
                        next_watering: today,
                        watering_frequency: template.watering_frequency.max(1),
                        fertilization_schedule: template.fertilization_schedule,
                        water_status: false,
                    };
                    match diesel::insert_into(watering_schedules::table)
                        .values(&row)
                        .execute(conn)
                    {
                        Ok(_) => {}
                        Err(DieselError::DatabaseError(
                            DatabaseErrorKind::UniqueViolation,
                            _,
                        )) => return Ok(CreateResult::AlreadyScheduled),
                        Err(err) => return Err(err),
                    }

                    Ok(CreateResult::Created(ScheduleView {
                        crop_name: crop.name,
                        image_url: crop.image_url,
                        last_watered: None,
                        next_watering: today,
                        growing_time: template.growing_time,
                        watering_frequency: template.watering_frequency.max(1),
                        fertilization_schedule: template.fertilization_schedule,
                    }))
                })
            })
            .await
            .map_err(map_pool_error)?;
        match result {
            CreateResult::Created(view) => Ok(ScheduleCreateOutcome::Created(view)),
            CreateResult::AlreadyScheduled => Ok(ScheduleCreateOutcome::AlreadyScheduled),
            CreateResult::UserMissing => Err(ScheduleRepositoryError::user_missing(uid)),
            CreateResult::CropMissing => {
                Err(ScheduleRepositoryError::crop_missing(name_for_error))
            }
            CreateResult::TemplateMissing => {
                Err(ScheduleRepositoryError::template_missing(name_for_error))
            }
        }
    }

    async fn record_watering(
        &self,
        user_id: UserId,
        crop_name: &str,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, ScheduleRepositoryError> {
        let uid = user_id.get();
        let name = crop_name.to_owned();
        let next = self
            .pool
            .run(move |conn| {
                conn.transaction(|conn| {
                    let Some(crop) = crop_by_name(conn, &name)? else {
                        return Ok(None);
                    };
                    let schedule: Option<ScheduleRow> = watering_schedules::table
                        .filter(watering_schedules::user_id.eq(uid))
                        .filter(watering_schedules::crop_id.eq(crop.id))
                        .select(ScheduleRow::as_select())
                        .first(conn)
                        .optional()?;
                    let Some(schedule) = schedule else {
                        return Ok(None);
                    };

                    let next =
                        next_watering_date(Some(today), schedule.watering_frequency, today);
                    // Only the dates move; `water_status` stays untouched so
                    // the schedule shows up overdue again once `next` passes.
                    diesel::update(watering_schedules::table.find(schedule.id))
                        .set((
                            watering_schedules::last_watered.eq(Some(today)),
                            watering_schedules::next_watering.eq(next),
                        ))
                        .execute(conn)?;
                    Ok(Some(next))
                })
            })
            .await
            .map_err(map_pool_error)?;
        Ok(next)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScheduleView>, ScheduleRepositoryError> {
        let uid = user_id.get();
        let views = self
            .pool
            .run(move |conn| {
                let rows: Vec<(ScheduleRow, CropRow)> = watering_schedules::table
                    .inner_join(crops::table)
                    .filter(watering_schedules::user_id.eq(uid))
                    .order(crops::name.asc())
                    .select((ScheduleRow::as_select(), CropRow::as_select()))
                    .load(conn)?;
                let templates: Vec<TemplateRow> = crop_schedule_templates::table
                    .select(TemplateRow::as_select())
                    .load(conn)?;
                let growing_times: HashMap<String, i32> = templates
                    .into_iter()
                    .map(|t| (t.crop_name, t.growing_time))
                    .collect();

                Ok(rows
                    .into_iter()
                    .map(|(schedule, crop)| ScheduleView {
                        growing_time: growing_times.get(&crop.name).copied().unwrap_or(0),
                        crop_name: crop.name,
                        image_url: crop.image_url,
                        last_watered: schedule.last_watered,
                        next_watering: schedule.next_watering,
                        watering_frequency: schedule.watering_frequency,
                        fertilization_schedule: schedule.fertilization_schedule,
                    })
                    .collect())
            })
            .await
            .map_err(map_pool_error)?;
        Ok(views)
    }

    async fn delete(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<bool, ScheduleRepositoryError> {
        let uid = user_id.get();
        let name = crop_name.to_owned();
        let deleted = self
            .pool
            .run(move |conn| {
                let Some(crop) = crop_by_name(conn, &name)? else {
                    return Ok(0);
                };
                diesel::delete(
                    watering_schedules::table
                        .filter(watering_schedules::user_id.eq(uid))
                        .filter(watering_schedules::crop_id.eq(crop.id)),
                )
                .execute(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(deleted > 0)
    }

    async fn list_overdue(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<OverdueSchedule>, ScheduleRepositoryError> {
        let rows: Vec<(i32, String, NaiveDate)> = self
            .pool
            .run(move |conn| {
                watering_schedules::table
                    .inner_join(crops::table)
                    .filter(watering_schedules::water_status.eq(false))
                    .filter(watering_schedules::next_watering.le(today))
                    .order((watering_schedules::user_id.asc(), crops::name.asc()))
                    .select((
                        watering_schedules::user_id,
                        crops::name,
                        watering_schedules::next_watering,
                    ))
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows
            .into_iter()
            .map(|(uid, crop_name, next_watering)| OverdueSchedule {
                user_id: UserId::new(uid),
                crop_name,
                next_watering,
            })
            .collect())
    }
}
