//! Game factory for creating test game entities.
//!
//! Defaults produce a game with a unique title, no description, a pending age rating (code
//! `0`) and version `0`.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("Halo")
///     .age_rating(Some(5))
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    age_rating: Option<i16>,
    franchise_id: Option<i32>,
    version: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with a unique default title.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Game {}", next_id()),
            description: None,
            age_rating: Some(0),
            franchise_id: None,
            version: 0,
        }
    }

    /// Sets the game title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the game description.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Sets the persisted age rating code; `None` stores `NULL`.
    pub fn age_rating(mut self, code: Option<i16>) -> Self {
        self.age_rating = code;
        self
    }

    /// Sets the franchise the game belongs to.
    pub fn franchise_id(mut self, franchise_id: Option<i32>) -> Self {
        self.franchise_id = franchise_id;
        self
    }

    /// Sets the starting concurrency version.
    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = now();

        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            age_rating: ActiveValue::Set(self.age_rating),
            franchise_id: ActiveValue::Set(self.franchise_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
