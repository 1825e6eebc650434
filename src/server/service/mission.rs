//! Mission catalog and completions.

use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashSet;

use crate::server::{
    data::{
        is_unique_violation, mission::MissionRepository, notification::NotificationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        mission::{Mission, MissionStatus},
        notification::CreateNotificationParam,
    },
    service::points::apply_points,
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Mission>, AppError> {
        let missions = MissionRepository::new(self.db).get_all().await?;

        Ok(missions)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No mission with that id
    pub async fn get(&self, mission_id: i32) -> Result<Mission, AppError> {
        MissionRepository::new(self.db)
            .find_by_id(mission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))
    }

    /// The full catalog, each mission flagged with whether the user completed it.
    pub async fn get_user_missions(&self, user_id: i32) -> Result<Vec<MissionStatus>, AppError> {
        let mission_repo = MissionRepository::new(self.db);

        let completed: HashSet<i32> = mission_repo
            .get_completed_ids(user_id)
            .await?
            .into_iter()
            .collect();

        Ok(mission_repo
            .get_all()
            .await?
            .into_iter()
            .map(|mission| MissionStatus {
                completed: completed.contains(&mission.id),
                mission,
            })
            .collect())
    }

    /// Records a completion and awards the mission's points exactly once.
    ///
    /// The completion row, the points and the notification are written in one
    /// transaction; the completion's primary key rejects a second attempt.
    ///
    /// # Returns
    /// - `Ok(i32)` - User's total after the reward
    /// - `Err(AppError::NotFound)` - Mission or user missing
    /// - `Err(AppError::BadRequest)` - Mission not approved
    /// - `Err(AppError::Conflict)` - Mission already completed by the user
    pub async fn complete(&self, user_id: i32, mission_id: i32) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;
        let mission_repo = MissionRepository::new(&txn);

        let mission = mission_repo
            .find_by_id(mission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        if !mission.is_approved {
            return Err(AppError::BadRequest("Mission is not approved".to_string()));
        }

        if let Err(err) = mission_repo.create_completion(user_id, mission.id).await {
            if is_unique_violation(&err) {
                return Err(AppError::Conflict("Mission already completed".to_string()));
            }
            return Err(err.into());
        }

        let total_points = if mission.points != 0 {
            apply_points(&txn, user_id, mission.points).await?
        } else {
            UserRepository::new(&txn)
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
                .points
        };

        NotificationRepository::new(&txn)
            .create(CreateNotificationParam {
                user_id,
                content: format!(
                    "Mission '{}' completed: {} points awarded",
                    mission.mission_name, mission.points
                ),
                notification_type: NotificationType::SystemNotification,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("User {} completed mission {}", user_id, mission.id);

        Ok(total_points)
    }
}
