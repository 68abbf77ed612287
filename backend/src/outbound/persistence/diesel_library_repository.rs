//! Diesel-backed per-user crop library.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::crop::Crop;
use crate::domain::ports::{LibraryAddOutcome, LibraryRepository, LibraryRepositoryError};
use crate::domain::user::UserId;

use super::functions::lower;
use super::models::CropRow;
use super::pool::{DbPool, PoolError};
use super::schema::{crops, user_crops, users};

pub struct DieselLibraryRepository {
    pool: DbPool,
}

impl DieselLibraryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> LibraryRepositoryError {
    match err {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            LibraryRepositoryError::connection(message)
        }
        other => LibraryRepositoryError::query(other.to_string()),
    }
}

/// Resolve a crop name to its id, case-insensitively.
fn crop_id_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i32>, DieselError> {
    crops::table
        .filter(lower(crops::name).eq(name.trim().to_lowercase()))
        .select(crops::id)
        .first(conn)
        .optional()
}

fn user_exists(conn: &mut SqliteConnection, user_id: i32) -> Result<bool, DieselError> {
    let count: i64 = users::table
        .filter(users::id.eq(user_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Intermediate result carried out of the blocking closure.
enum AddResult {
    Added,
    AlreadyPresent,
    UserMissing,
    CropMissing,
}

#[async_trait]
impl LibraryRepository for DieselLibraryRepository {
    async fn add(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<LibraryAddOutcome, LibraryRepositoryError> {
        let uid = user_id.get();
        let name = crop_name.to_owned();
        let name_for_error = crop_name.to_owned();
        let result = self
            .pool
            .run(move |conn| {
                if !user_exists(conn, uid)? {
                    return Ok(AddResult::UserMissing);
                }
                let Some(crop_id) = crop_id_by_name(conn, &name)? else {
                    return Ok(AddResult::CropMissing);
                };
                let inserted = diesel::insert_into(user_crops::table)
                    .values((user_crops::user_id.eq(uid), user_crops::crop_id.eq(crop_id)))
                    .execute(conn);
                match inserted {
                    Ok(_) => Ok(AddResult::Added),
                    Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                        Ok(AddResult::AlreadyPresent)
                    }
                    Err(err) => Err(err),
                }
            })
            .await
            .map_err(map_pool_error)?;
        match result {
            AddResult::Added => Ok(LibraryAddOutcome::Added),
            AddResult::AlreadyPresent => Ok(LibraryAddOutcome::AlreadyPresent),
            AddResult::UserMissing => Err(LibraryRepositoryError::user_missing(uid)),
            AddResult::CropMissing => Err(LibraryRepositoryError::crop_missing(name_for_error)),
        }
    }

    async fn remove(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<bool, LibraryRepositoryError> {
        let uid = user_id.get();
        let name = crop_name.to_owned();
        let removed = self
            .pool
            .run(move |conn| {
                let Some(crop_id) = crop_id_by_name(conn, &name)? else {
                    return Ok(0);
                };
                diesel::delete(
                    user_crops::table
                        .filter(user_crops::user_id.eq(uid))
                        .filter(user_crops::crop_id.eq(crop_id)),
                )
                .execute(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(removed > 0)
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Crop>, LibraryRepositoryError> {
        let uid = user_id.get();
        let rows = self
            .pool
            .run(move |conn| {
                user_crops::table
                    .inner_join(crops::table)
                    .filter(user_crops::user_id.eq(uid))
                    .order(crops::name.asc())
                    .select(CropRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows.into_iter().map(CropRow::into_crop).collect())
    }
}
