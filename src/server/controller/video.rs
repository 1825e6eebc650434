use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, video::VideoDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::video::VideoService,
        state::AppState,
    },
};

/// Tag for grouping video endpoints in OpenAPI documentation
pub static VIDEO_TAG: &str = "video";

/// List videos of every game the user takes part in.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/videos/{user_id}/",
    tag = VIDEO_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Videos of the user's games", body = Vec<VideoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the video owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_videos(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let videos = VideoService::new(&state.db).get_user_videos(user_id).await?;
    let dtos: Vec<VideoDto> = videos.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/videos/game/{game_id}/",
    tag = VIDEO_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Videos of the game", body = Vec<VideoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_videos(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let videos = VideoService::new(&state.db).get_game_videos(game_id).await?;
    let dtos: Vec<VideoDto> = videos.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
