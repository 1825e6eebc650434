use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PointsTotalDto},
        mission::{MissionDto, UserMissionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

/// List the mission catalog.
#[utoipa::path(
    get,
    path = "/api/missions/",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "All missions", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let missions = MissionService::new(&state.db).get_all().await?;
    let dtos: Vec<MissionDto> = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/missions/{mission_id}/",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission details", body = MissionDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).get(mission_id).await?;

    Ok((StatusCode::OK, Json(mission.into_dto())))
}

/// List the mission catalog with the user's completion flag on each entry.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/missions/user/{user_id}/",
    tag = MISSION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Missions with completion status", body = Vec<UserMissionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the mission owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_missions(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let missions = MissionService::new(&state.db)
        .get_user_missions(user_id)
        .await?;
    let dtos: Vec<UserMissionDto> = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Complete a mission and receive its reward.
///
/// A mission can be completed once per user; the reward is written to the points ledger
/// in the same transaction as the completion.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - Completed; response carries the new point total
/// - `400 Bad Request` - Mission not approved or already completed
/// - `404 Not Found` - Mission does not exist
#[utoipa::path(
    post,
    path = "/api/missions/user/{user_id}/complete/{mission_id}/",
    tag = MISSION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission completed", body = PointsTotalDto),
        (status = 400, description = "Mission not approved or already completed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the mission owner", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_mission(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, mission_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let total_points = MissionService::new(&state.db)
        .complete(user_id, mission_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PointsTotalDto {
            message: "Mission completed".to_string(),
            total_points,
        }),
    ))
}
