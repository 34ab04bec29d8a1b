use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        association::AssociationRepository, barcode::BarcodeRepository,
        catalog::CatalogRepository, game::GameRepository,
    },
    error::AppError,
    i18n::{MessageKey, Messages},
    model::{
        association::AssociationKind,
        catalog::{CatalogEntry, CreateCatalogEntryParams, UpdateCatalogEntryParams},
        page::{Page, PageRequest},
    },
};

/// Genre, platform, publisher and developer operations, selected by `AssociationKind`.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    /// Creates a catalog entry of `kind` at version 0.
    ///
    /// # Returns
    /// - `Ok(CatalogEntry)` - The created entry
    /// - `Err(AppError::ValidationErr)` - Blank name or overlong description
    /// - `Err(AppError::DbErr)` - Name already taken within `kind` (409)
    pub async fn create(
        &self,
        kind: AssociationKind,
        params: CreateCatalogEntryParams,
    ) -> Result<CatalogEntry, AppError> {
        params.validate()?;

        let entry = CatalogRepository::new(self.db)
            .create(kind, params, Utc::now())
            .await?;

        tracing::info!("Created {} {} '{}'", kind, entry.id, entry.name);

        Ok(entry)
    }

    pub async fn get_by_id(&self, kind: AssociationKind, id: i32) -> Result<CatalogEntry, AppError> {
        CatalogRepository::new(self.db)
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| self.not_found(kind, id))
    }

    /// Gets a page of entries of `kind` ordered by name.
    pub async fn get_paginated(
        &self,
        kind: AssociationKind,
        page: Option<PageRequest>,
    ) -> Result<Page<CatalogEntry>, AppError> {
        let page = page.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::PageRequestMissing))
        })?;
        page.validate()?;

        let (entries, total) = CatalogRepository::new(self.db)
            .get_paginated(kind, page.page, page.per_page)
            .await?;

        Ok(Page {
            items: entries,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Entries of `kind` linked to a game, ordered by name.
    pub async fn find_for_game_id(
        &self,
        kind: AssociationKind,
        game_id: i32,
    ) -> Result<Vec<CatalogEntry>, AppError> {
        if !GameRepository::new(self.db).exists(game_id).await? {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::GameNotFound, game_id),
            ));
        }

        let ids = AssociationRepository::new(self.db)
            .target_ids(kind, game_id)
            .await?;

        Ok(CatalogRepository::new(self.db)
            .find_by_ids(kind, &ids)
            .await?)
    }

    /// Ids of the games linked to an entry, ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Linked game ids, empty when nothing links the entry
    /// - `Err(AppError::NotFound)` - No entry of `kind` with `id`
    pub async fn game_ids(&self, kind: AssociationKind, id: i32) -> Result<Vec<i32>, AppError> {
        if !CatalogRepository::new(self.db).exists(kind, id).await? {
            return Err(self.not_found(kind, id));
        }

        Ok(AssociationRepository::new(self.db)
            .game_ids(kind, id)
            .await?)
    }

    /// Replaces name and description when `params.version` is current.
    ///
    /// # Returns
    /// - `Ok(CatalogEntry)` - The updated entry, version incremented by one
    /// - `Err(AppError::NotFound)` - No entry with that id
    /// - `Err(AppError::ConcurrencyConflict)` - Stored version differs from `params.version`
    pub async fn update(
        &self,
        kind: AssociationKind,
        params: UpdateCatalogEntryParams,
    ) -> Result<CatalogEntry, AppError> {
        params.validate()?;

        let id = params.id;
        let txn = self.db.begin().await?;
        let repo = CatalogRepository::new(&txn);

        if repo.update_versioned(kind, params, Utc::now()).await? == 0 {
            return Err(self.stale_or_missing(&repo, kind, id).await);
        }

        let entry = repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| self.not_found(kind, id))?;

        txn.commit().await?;

        Ok(entry)
    }

    /// Deletes an entry after unlinking it from every game.
    ///
    /// Deleting a platform also deletes the barcodes recorded for it.
    pub async fn delete(&self, kind: AssociationKind, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CatalogRepository::new(&txn);

        if !repo.exists(kind, id).await? {
            return Err(self.not_found(kind, id));
        }

        let unlinked = AssociationRepository::new(&txn)
            .remove_all_for_target(kind, id)
            .await?;
        if kind == AssociationKind::Platform {
            BarcodeRepository::new(&txn).delete_for_platform(id).await?;
        }
        repo.delete(kind, id).await?;

        txn.commit().await?;

        tracing::info!("Deleted {} {} and {} game links", kind, id, unlinked);

        Ok(())
    }

    async fn stale_or_missing<C: ConnectionTrait>(
        &self,
        repo: &CatalogRepository<'_, C>,
        kind: AssociationKind,
        id: i32,
    ) -> AppError {
        match repo.exists(kind, id).await {
            Ok(true) => {
                AppError::ConcurrencyConflict(self.messages.get(MessageKey::VersionConflict, id))
            }
            Ok(false) => self.not_found(kind, id),
            Err(err) => err.into(),
        }
    }

    fn not_found(&self, kind: AssociationKind, id: i32) -> AppError {
        AppError::NotFound(self.messages.get(kind.not_found_key(), id))
    }
}
