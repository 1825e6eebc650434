use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::mission::Mission;

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    pub async fn find_by_id(&self, mission_id: i32) -> Result<Option<Mission>, DbErr> {
        let entity = entity::prelude::Mission::find_by_id(mission_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Mission::from_entity))
    }

    /// Ids of the missions the user has completed.
    pub async fn get_completed_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserMission::find()
            .select_only()
            .column(entity::user_mission::Column::MissionId)
            .filter(entity::user_mission::Column::UserId.eq(user_id))
            .filter(entity::user_mission::Column::Completed.eq(true))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Records a completion.
    ///
    /// # Returns
    /// - `Ok(())` - Completion recorded
    /// - `Err(DbErr)` - Database error; a unique violation means the user already
    ///   completed the mission
    pub async fn create_completion(&self, user_id: i32, mission_id: i32) -> Result<(), DbErr> {
        entity::user_mission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            mission_id: ActiveValue::Set(mission_id),
            completed: ActiveValue::Set(true),
            completion_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
