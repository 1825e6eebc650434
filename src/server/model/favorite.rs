use crate::model::favorite::FavoriteDto;

/// A favorited game as listed for its user.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteGame {
    pub game_id: i32,
    pub game_name: String,
    pub liked: bool,
}

impl FavoriteGame {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            game_id: self.game_id,
            game: self.game_name,
            liked: self.liked,
        }
    }
}
