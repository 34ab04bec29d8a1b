use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, release_date::ReleaseDateRepository},
    error::AppError,
    i18n::{MessageKey, Messages},
    model::release_date::{CreateReleaseDateParams, ReleaseDate},
};

/// Per-region release dates owned by a game.
pub struct ReleaseDateService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> ReleaseDateService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    /// Release dates of a game ordered by region.
    pub async fn find_for_game_id(&self, game_id: i32) -> Result<Vec<ReleaseDate>, AppError> {
        self.require_game(self.db, game_id).await?;

        let rows = ReleaseDateRepository::new(self.db)
            .find_for_game(game_id)
            .await?;

        rows.into_iter()
            .map(|row| ReleaseDate::from_entity(row).map_err(AppError::from))
            .collect()
    }

    /// Sets the release date of one region, replacing an earlier date for that region.
    ///
    /// # Returns
    /// - `Ok(ReleaseDate)` - The stored release date
    /// - `Err(AppError::ValidationErr)` - Region or date missing
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn add(
        &self,
        game_id: i32,
        params: CreateReleaseDateParams,
    ) -> Result<ReleaseDate, AppError> {
        let release = params.validate()?;

        let txn = self.db.begin().await?;

        self.require_game(&txn, game_id).await?;

        let row = ReleaseDateRepository::new(&txn)
            .upsert(game_id, release, Utc::now())
            .await?;

        txn.commit().await?;

        tracing::debug!("Set {} release date of game {}", row.region, game_id);

        Ok(ReleaseDate::from_entity(row)?)
    }

    pub async fn remove(&self, game_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        self.require_game(&txn, game_id).await?;

        if ReleaseDateRepository::new(&txn).delete(game_id, id).await? == 0 {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::ReleaseDateNotFound, id),
            ));
        }

        txn.commit().await?;

        Ok(())
    }

    async fn require_game<C: ConnectionTrait>(&self, db: &C, game_id: i32) -> Result<(), AppError> {
        if !GameRepository::new(db).exists(game_id).await? {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::GameNotFound, game_id),
            ));
        }

        Ok(())
    }
}
