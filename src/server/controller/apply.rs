use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        apply::ApplyDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::apply::ApplyService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLY_TAG: &str = "apply";

/// List a user's game applications.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/applies/{user_id}/",
    tag = APPLY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Applications of the user", body = Vec<ApplyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the application owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let applications = ApplyService::new(&state.db)
        .get_applications(user_id)
        .await?;
    let dtos: Vec<ApplyDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Apply to a game.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `201 Created` - Application created as `Pending`
/// - `400 Bad Request` - A pending or accepted application already exists
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    post,
    path = "/api/applies/{user_id}/apply/{game_id}/",
    tag = APPLY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 201, description = "Application created", body = MessageDto),
        (status = 400, description = "Active application exists", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the application owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_game(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, game_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    ApplyService::new(&state.db).apply(user_id, game_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Game application successful")),
    ))
}

/// Cancel the user's applications to a game by deleting them.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    post,
    path = "/api/applies/{user_id}/cancel/{game_id}/",
    tag = APPLY_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Application cancelled", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the application owner", body = ErrorDto),
        (status = 404, description = "No application for this game", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_application(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, game_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    ApplyService::new(&state.db).cancel(user_id, game_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Application cancelled successfully")),
    ))
}
