use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub game_id: i32,
    /// Name of the favorited game.
    pub game: String,
    pub liked: bool,
}
