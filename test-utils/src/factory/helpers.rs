//! Shared helper utilities for factory methods.
//!
//! Provides the unique id counter used by every factory and shorthands for linking a game to
//! catalog entries through the join tables.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Catalog names carry a unique constraint, so factories append this value to every default
/// name.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current timestamp used for audit columns.
pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

/// Links a game to a genre.
pub async fn link_genre(
    db: &DatabaseConnection,
    game_id: i32,
    genre_id: i32,
) -> Result<entity::game_genre::Model, DbErr> {
    entity::game_genre::link(game_id, genre_id).insert(db).await
}

/// Links a game to a platform.
pub async fn link_platform(
    db: &DatabaseConnection,
    game_id: i32,
    platform_id: i32,
) -> Result<entity::game_platform::Model, DbErr> {
    entity::game_platform::link(game_id, platform_id)
        .insert(db)
        .await
}

/// Links a game to a publisher.
pub async fn link_publisher(
    db: &DatabaseConnection,
    game_id: i32,
    publisher_id: i32,
) -> Result<entity::game_publisher::Model, DbErr> {
    entity::game_publisher::link(game_id, publisher_id)
        .insert(db)
        .await
}

/// Links a game to a developer.
pub async fn link_developer(
    db: &DatabaseConnection,
    game_id: i32,
    developer_id: i32,
) -> Result<entity::game_developer::Model, DbErr> {
    entity::game_developer::link(game_id, developer_id)
        .insert(db)
        .await
}
