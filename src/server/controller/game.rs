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
        game::GameDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get a game with its current participant count.
#[utoipa::path(
    get,
    path = "/api/games/{game_id}/",
    tag = GAME_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game details", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get(game_id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Join a game as the session user.
///
/// The game closes (status `finished`) when the last free place is taken.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `200 OK` - Joined
/// - `400 Bad Request` - Game not open, already joined or full
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - User level below the game's requirement
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    post,
    path = "/api/games/{game_id}/join/",
    tag = GAME_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Joined the game", body = MessageDto),
        (status = 400, description = "Game not open, already joined or full", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Level requirement not met", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GameService::new(&state.db).join(game_id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Successfully joined the game")),
    ))
}
