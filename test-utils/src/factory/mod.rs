//! Factory methods for creating test data.
//!
//! Each entity has its own module with a `Factory` builder for customization and a
//! `create_*` shorthand for inserting a row with defaults. Factories take the foreign keys
//! they need as arguments; `helpers` bundles the common dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let level = factory::create_level(&db).await?;
//!     let user = factory::create_user(&db, level.id).await?;
//!     let game = factory::create_game(&db, level.id).await?;
//!
//!     // Or all at once
//!     let (level, user, game) = factory::helpers::create_game_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db, level.id)
//!     .phone_number("01012345678")
//!     .points(100)
//!     .build()
//!     .await?;
//! ```

pub mod apply;
pub mod game;
pub mod helpers;
pub mod level;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod user;
pub mod video;

pub use apply::create_apply;
pub use game::{add_participant, create_game};
pub use level::{create_level, seed_levels};
pub use mission::create_mission;
pub use notification::create_notification;
pub use payment::create_payment;
pub use user::create_user;
pub use video::create_video;
