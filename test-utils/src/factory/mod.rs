//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
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
//!     let franchise = factory::create_franchise(&db).await?;
//!     let game = factory::game::GameFactory::new(&db)
//!         .title("Metroid Prime")
//!         .franchise_id(Some(franchise.id))
//!         .build()
//!         .await?;
//!     let platform = factory::create_platform(&db).await?;
//!     factory::link_platform(&db, game.id, platform.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `game` - Create game entities
//! - `catalog` - Create genre, platform, publisher and developer entities
//! - `franchise` - Create franchise entities
//! - `child` - Create release dates, downloadable content, modes and barcodes
//! - `helpers` - Unique id counter and join-row helpers

pub mod catalog;
pub mod child;
pub mod franchise;
pub mod game;
pub mod helpers;

pub use catalog::{create_developer, create_genre, create_platform, create_publisher};
pub use child::{create_barcode, create_dlc, create_mode, create_release_date};
pub use franchise::create_franchise;
pub use game::create_game;
pub use helpers::{link_developer, link_genre, link_platform, link_publisher};
