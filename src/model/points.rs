use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PointsLog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsDto {
    pub points_id: i32,
    #[schema(value_type = String, example = "earned")]
    pub points_log: PointsLog,
    pub amount: i32,
    pub total_points: i32,
    pub event_date: DateTime<Utc>,
}

/// Request body for adding or deducting points.
///
/// OpenAPI schema only, never deserialized: the handler reads the raw JSON so that
/// floats, booleans and strings can be rejected explicitly.
#[allow(dead_code)]
#[derive(Debug, ToSchema)]
pub struct AddPointsDto {
    /// Non-zero integer; negative values deduct.
    pub points: i64,
}
