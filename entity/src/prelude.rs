pub use super::apply::Entity as Apply;
pub use super::favorite::Entity as Favorite;
pub use super::game::Entity as Game;
pub use super::game_participant::Entity as GameParticipant;
pub use super::level::Entity as Level;
pub use super::mission::Entity as Mission;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::points::Entity as Points;
pub use super::user::Entity as User;
pub use super::user_mission::Entity as UserMission;
pub use super::video::Entity as Video;
