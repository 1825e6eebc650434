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
        favorite::FavoriteDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List the games a user has favorited.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/favorites/{user_id}/",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorited games", body = Vec<FavoriteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the favorites owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let favorites = FavoriteService::new(&state.db).get_favorites(user_id).await?;
    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Favorite a game.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `201 Created` - Favorite added
/// - `400 Bad Request` - Game already favorited
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    post,
    path = "/api/favorites/{user_id}/add/{game_id}/",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Already favorited", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the favorites owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, game_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    FavoriteService::new(&state.db).add(user_id, game_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Game added to favorites")),
    ))
}

/// Remove a game from the user's favorites.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `404 Not Found` - The game was not a favorite
#[utoipa::path(
    post,
    path = "/api/favorites/{user_id}/remove/{game_id}/",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the favorites owner", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, game_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    FavoriteService::new(&state.db)
        .remove(user_id, game_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Game removed from favorites")),
    ))
}
