//! Points service.
//!
//! Every change to a user's point total goes through `apply_points`, which updates the
//! cached total and appends the matching ledger row on the caller's connection, so the two
//! never diverge.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{points::PointsRepository, user::UserRepository},
    error::AppError,
    model::points::{CreatePointsEntryParam, PointsEntry},
};

pub struct PointsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ledger of a user, newest first.
    pub async fn get_entries(&self, user_id: i32) -> Result<Vec<PointsEntry>, AppError> {
        let entries = PointsRepository::new(self.db).get_by_user_id(user_id).await?;

        Ok(entries)
    }

    /// Adds a signed amount to a user's total.
    ///
    /// Not idempotent: each call writes another ledger row.
    ///
    /// # Returns
    /// - `Ok(i32)` - New total
    /// - `Err(AppError::BadRequest)` - Total would become negative or overflow
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn add(&self, user_id: i32, delta: i32) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        let total_points = apply_points(&txn, user_id, delta).await?;

        txn.commit().await?;

        Ok(total_points)
    }
}

/// Applies `delta` to the user's total and records it in the ledger.
///
/// Must run inside a transaction: on error the caller drops it, undoing the update.
///
/// # Returns
/// - `Ok(i32)` - New total
/// - `Err(AppError::BadRequest)` - Total would become negative or overflow
/// - `Err(AppError::NotFound)` - No user with that id
pub(crate) async fn apply_points<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    delta: i32,
) -> Result<i32, AppError> {
    let user_repo = UserRepository::new(conn);
    let not_found = || AppError::NotFound("User not found".to_string());

    let user = user_repo.find_by_id(user_id).await?.ok_or_else(not_found)?;
    if user.points.checked_add(delta).is_none() {
        return Err(AppError::BadRequest("Points total out of range".to_string()));
    }

    if !user_repo.add_points(user_id, delta).await? {
        return Err(not_found());
    }

    let total_points = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(not_found)?
        .points;

    if total_points < 0 {
        return Err(AppError::BadRequest(
            "Not enough points for this deduction".to_string(),
        ));
    }

    PointsRepository::new(conn)
        .create(CreatePointsEntryParam {
            user_id,
            delta,
            total_points,
        })
        .await?;

    Ok(total_points)
}
