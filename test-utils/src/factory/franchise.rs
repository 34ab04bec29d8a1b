//! Franchise factory for creating test franchise entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test franchises with customizable fields.
pub struct FranchiseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
}

impl<'a> FranchiseFactory<'a> {
    /// Creates a new FranchiseFactory with a unique default title.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Franchise {}", next_id()),
            description: None,
        }
    }

    /// Sets the franchise title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the franchise description.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Builds and inserts the franchise entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::franchise::Model)` - Created franchise entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::franchise::Model, DbErr> {
        let now = now();

        entity::franchise::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a franchise with default values.
pub async fn create_franchise(db: &DatabaseConnection) -> Result<entity::franchise::Model, DbErr> {
    FranchiseFactory::new(db).build().await
}
