use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PointsTotalDto},
        points::{AddPointsDto, PointsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::points::PointsService,
        state::AppState,
        util::parse::parse_points,
    },
};

/// Tag for grouping points endpoints in OpenAPI documentation
pub static POINTS_TAG: &str = "points";

/// List a user's points ledger, newest entry first.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/points/{user_id}/",
    tag = POINTS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Ledger entries", body = Vec<PointsDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the ledger owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let entries = PointsService::new(&state.db).get_entries(user_id).await?;
    let dtos: Vec<PointsDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add points to, or deduct points from, a user.
///
/// The body is read as raw JSON so that floats, booleans and numeric strings are rejected
/// instead of coerced. Every call appends a ledger entry; repeating it applies it again.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - New total
/// - `400 Bad Request` - `points` missing, zero, not an integer, or the total would go negative
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Session user is not `user_id`
#[utoipa::path(
    post,
    path = "/api/points/{user_id}/add/",
    tag = POINTS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = AddPointsDto,
    responses(
        (status = 200, description = "Points applied", body = PointsTotalDto),
        (status = 400, description = "Invalid points value or negative total", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the ledger owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_points(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let delta = parse_points(&payload["points"])?;
    let total_points = PointsService::new(&state.db).add(user_id, delta).await?;

    Ok((
        StatusCode::OK,
        Json(PointsTotalDto {
            message: "Points updated successfully".to_string(),
            total_points,
        }),
    ))
}
