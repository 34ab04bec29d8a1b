use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{franchise::FranchiseRepository, game::GameRepository},
    error::AppError,
    i18n::{MessageKey, Messages},
    model::{
        franchise::{CreateFranchiseParams, Franchise, UpdateFranchiseParams},
        page::{Page, PageRequest},
    },
};

pub struct FranchiseService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> FranchiseService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    pub async fn create(&self, params: CreateFranchiseParams) -> Result<Franchise, AppError> {
        params.validate()?;

        let franchise = FranchiseRepository::new(self.db)
            .create(params, Utc::now())
            .await?;

        tracing::info!("Created franchise {} '{}'", franchise.id, franchise.title);

        Ok(Franchise::from_entity(franchise))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Franchise, AppError> {
        FranchiseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Franchise::from_entity)
            .ok_or_else(|| self.not_found(id))
    }

    pub async fn get_paginated(
        &self,
        page: Option<PageRequest>,
    ) -> Result<Page<Franchise>, AppError> {
        let page = page.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::PageRequestMissing))
        })?;
        page.validate()?;

        let (franchises, total) = FranchiseRepository::new(self.db)
            .get_paginated(page.page, page.per_page)
            .await?;

        Ok(Page {
            items: franchises.into_iter().map(Franchise::from_entity).collect(),
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Replaces title and description when `params.version` is current.
    ///
    /// # Returns
    /// - `Ok(Franchise)` - The updated franchise
    /// - `Err(AppError::NotFound)` - No franchise with that id
    /// - `Err(AppError::ConcurrencyConflict)` - Stored version differs from `params.version`
    pub async fn update(&self, params: UpdateFranchiseParams) -> Result<Franchise, AppError> {
        params.validate()?;

        let id = params.id;
        let txn = self.db.begin().await?;
        let repo = FranchiseRepository::new(&txn);

        if repo.update_versioned(params, Utc::now()).await? == 0 {
            return Err(if repo.exists(id).await? {
                AppError::ConcurrencyConflict(self.messages.get(MessageKey::VersionConflict, id))
            } else {
                self.not_found(id)
            });
        }

        let franchise = repo
            .find_by_id(id)
            .await?
            .map(Franchise::from_entity)
            .ok_or_else(|| self.not_found(id))?;

        txn.commit().await?;

        Ok(franchise)
    }

    /// Deletes a franchise. Its games stay and lose their franchise reference.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = FranchiseRepository::new(&txn);

        if !repo.exists(id).await? {
            return Err(self.not_found(id));
        }

        let released = GameRepository::new(&txn).clear_franchise(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted franchise {} and released {} games", id, released);

        Ok(())
    }

    fn not_found(&self, id: i32) -> AppError {
        AppError::NotFound(self.messages.get(MessageKey::FranchiseNotFound, id))
    }
}
