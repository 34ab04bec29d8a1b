use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{downloadable_content::DownloadableContentRepository, game::GameRepository},
    error::AppError,
    i18n::{MessageKey, Messages},
    model::downloadable_content::{CreateDownloadableContentParams, DownloadableContent},
};

pub struct DownloadableContentService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> DownloadableContentService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    pub async fn find_for_game_id(
        &self,
        game_id: i32,
    ) -> Result<Vec<DownloadableContent>, AppError> {
        self.require_game(self.db, game_id).await?;

        let rows = DownloadableContentRepository::new(self.db)
            .find_for_game(game_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(DownloadableContent::from_entity)
            .collect())
    }

    /// Adds downloadable content to a game.
    ///
    /// # Returns
    /// - `Ok(DownloadableContent)` - The created content
    /// - `Err(AppError::ValidationErr)` - Blank name or overlong description
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn add(
        &self,
        game_id: i32,
        params: CreateDownloadableContentParams,
    ) -> Result<DownloadableContent, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        self.require_game(&txn, game_id).await?;

        let row = DownloadableContentRepository::new(&txn)
            .create(game_id, params, Utc::now())
            .await?;

        txn.commit().await?;

        Ok(DownloadableContent::from_entity(row))
    }

    pub async fn remove(&self, game_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        self.require_game(&txn, game_id).await?;

        if DownloadableContentRepository::new(&txn)
            .delete(game_id, id)
            .await?
            == 0
        {
            return Err(AppError::NotFound(
                self.messages
                    .get(MessageKey::DownloadableContentNotFound, id),
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
