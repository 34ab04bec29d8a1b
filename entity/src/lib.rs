//! SeaORM entity definitions for the game catalog.
//!
//! Games own their association join rows (`game_genre`, `game_platform`, `game_publisher`,
//! `game_developer`), their game modes, release dates and downloadable content. Join rows are
//! the single source of truth for both directions of a many-to-many relation: a genre's games
//! and a game's genres are two lookups against the same table.
//!
//! Every join module exposes the same small API (`TARGET`, `link`, `Model::target_id`) so the
//! server can treat the four association kinds uniformly.

pub mod prelude;
pub mod schema;

pub mod developer;
pub mod downloadable_content;
pub mod franchise;
pub mod game;
pub mod game_barcode;
pub mod game_developer;
pub mod game_genre;
pub mod game_mode;
pub mod game_platform;
pub mod game_publisher;
pub mod game_release_date;
pub mod genre;
pub mod platform;
pub mod publisher;
