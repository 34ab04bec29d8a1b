use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::BTreeSet;

use crate::server::{
    data::{
        association::AssociationRepository, barcode::BarcodeRepository,
        catalog::CatalogRepository, downloadable_content::DownloadableContentRepository,
        franchise::FranchiseRepository, game::GameRepository,
        release_date::ReleaseDateRepository,
    },
    error::AppError,
    i18n::{MessageKey, Messages},
    model::{
        association::AssociationKind,
        filter::GameFilter,
        game::{CreateGameParams, Game, UpdateGameParams},
        page::{Page, PageRequest},
        patch::GamePatch,
    },
};

/// Which way an id collection is applied to an association set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssociationUpdate {
    /// The resolved ids become the whole set.
    Replace,
    /// The resolved ids are added to the current set.
    Merge,
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    /// Creates a game at version 0.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(AppError::ValidationErr)` - Blank title or overlong description
    /// - `Err(AppError::NotFound)` - `franchise_id` does not resolve
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        if let Some(franchise_id) = params.franchise_id {
            self.require_franchise(&txn, franchise_id).await?;
        }

        let game = GameRepository::new(&txn).create(params, Utc::now()).await?;
        let game = self.load(&txn, game.id).await?;

        txn.commit().await?;

        tracing::info!("Created game {} '{}'", game.id, game.title);

        Ok(game)
    }

    /// Gets a game by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        self.load(self.db, id).await
    }

    /// Every game ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        let games = repo.find_all().await?;

        self.assemble(&repo, games).await
    }

    /// Gets a page of games matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Page<Game>)` - Matching games for the requested page
    /// - `Err(AppError::InvalidArgument)` - `page` is absent
    /// - `Err(AppError::ValidationErr)` - Page size outside `1..=100`
    pub async fn find_paginated(
        &self,
        filter: GameFilter,
        page: Option<PageRequest>,
    ) -> Result<Page<Game>, AppError> {
        let page = self.require_page(page)?;
        let repo = GameRepository::new(self.db);

        let (games, total) = repo.find_page(&filter, &page).await?;
        let games = self.assemble(&repo, games).await?;

        Ok(Page {
            items: games,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Number of games matching `filter`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Match count
    /// - `Err(AppError::InvalidArgument)` - `filter` is absent
    pub async fn count(&self, filter: Option<GameFilter>) -> Result<u64, AppError> {
        let filter = filter.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::FilterMissing))
        })?;

        Ok(GameRepository::new(self.db).count(&filter).await?)
    }

    /// Games associated with one catalog entry.
    ///
    /// Fails with NotFound when the entry does not exist, even if no game references it.
    pub async fn find_by_association(
        &self,
        kind: AssociationKind,
        id: i32,
        page: Option<PageRequest>,
    ) -> Result<Page<Game>, AppError> {
        self.require_entry(self.db, kind, id).await?;

        self.find_paginated(GameFilter::by_association(kind, id), page)
            .await
    }

    pub async fn count_by_association(
        &self,
        kind: AssociationKind,
        id: i32,
    ) -> Result<u64, AppError> {
        self.require_entry(self.db, kind, id).await?;

        self.count(Some(GameFilter::by_association(kind, id))).await
    }

    /// Games in one franchise. Fails with NotFound when the franchise does not exist.
    pub async fn find_by_franchise(
        &self,
        id: i32,
        page: Option<PageRequest>,
    ) -> Result<Page<Game>, AppError> {
        self.require_franchise(self.db, id).await?;

        self.find_paginated(GameFilter::by_franchise(id), page).await
    }

    pub async fn count_by_franchise(&self, id: i32) -> Result<u64, AppError> {
        self.require_franchise(self.db, id).await?;

        self.count(Some(GameFilter::by_franchise(id))).await
    }

    /// Replaces a game's scalar fields and modes when `params.version` is current.
    ///
    /// # Returns
    /// - `Ok(Game)` - The updated game, version incremented by one
    /// - `Err(AppError::ValidationErr)` - Merged fields fail validation
    /// - `Err(AppError::NotFound)` - Game or franchise does not exist
    /// - `Err(AppError::ConcurrencyConflict)` - Stored version differs from `params.version`
    pub async fn update(&self, params: UpdateGameParams) -> Result<Game, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        let repo = GameRepository::new(&txn);

        if let Some(franchise_id) = params.franchise_id {
            self.require_franchise(&txn, franchise_id).await?;
        }

        let now = Utc::now();
        if repo.update_versioned(&params, now).await? == 0 {
            return Err(self.stale_or_missing(&repo, params.id).await);
        }
        repo.replace_modes(params.id, &params.game_modes).await?;

        let game = self.load(&txn, params.id).await?;

        txn.commit().await?;

        Ok(game)
    }

    /// Applies a merge-patch document to a game.
    ///
    /// The patch is merged onto the stored state and the result goes through the same
    /// validation and version check as `update`. A `version` in the patch replaces the stored
    /// version as the expected version.
    ///
    /// # Returns
    /// - `Ok(Game)` - The patched game
    /// - `Err(AppError::InvalidArgument)` - `patch` is absent
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn patch(&self, id: i32, patch: Option<GamePatch>) -> Result<Game, AppError> {
        let patch = patch.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::PatchMissing))
        })?;

        let current = self.load(self.db, id).await?;
        let params = patch.apply(UpdateGameParams::from_game(&current));

        self.update(params).await
    }

    /// Deletes a game together with its join rows, modes and owned children.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = GameRepository::new(&txn);

        if !repo.exists(id).await? {
            return Err(self.game_not_found(id));
        }

        let associations = AssociationRepository::new(&txn);
        for kind in AssociationKind::ALL {
            associations.remove_all_for_game(kind, id).await?;
        }
        repo.delete_modes(id).await?;
        ReleaseDateRepository::new(&txn).delete_for_game(id).await?;
        DownloadableContentRepository::new(&txn)
            .delete_for_game(id)
            .await?;
        BarcodeRepository::new(&txn).delete_for_game(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted game {}", id);

        Ok(())
    }

    /// Replaces a game's association set of `kind` with the resolved `ids`.
    ///
    /// Ids that do not resolve to an entry are dropped. Entries leaving the set are unlinked,
    /// which removes the game from their side as well.
    ///
    /// # Returns
    /// - `Ok(Game)` - The game after the update
    /// - `Err(AppError::InvalidArgument)` - `ids` is absent
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn save_associations_for_game_id(
        &self,
        kind: AssociationKind,
        game_id: i32,
        ids: Option<Vec<i32>>,
    ) -> Result<Game, AppError> {
        self.update_associations(kind, game_id, ids, AssociationUpdate::Replace)
            .await
    }

    /// Adds the resolved `ids` to a game's association set of `kind`.
    ///
    /// Existing members stay; ids that do not resolve are dropped.
    pub async fn update_associations_for_game_id(
        &self,
        kind: AssociationKind,
        game_id: i32,
        ids: Option<Vec<i32>>,
    ) -> Result<Game, AppError> {
        self.update_associations(kind, game_id, ids, AssociationUpdate::Merge)
            .await
    }

    /// Links one catalog entry to a game. Linking an existing pair is a no-op.
    pub async fn add_association(
        &self,
        kind: AssociationKind,
        game_id: i32,
        target_id: i32,
    ) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        let game = self.load(&txn, game_id).await?;
        self.require_entry(&txn, kind, target_id).await?;

        if AssociationRepository::new(&txn)
            .add(kind, game_id, target_id)
            .await?
        {
            self.touch(&txn, &game).await?;
        }

        let game = self.load(&txn, game_id).await?;

        txn.commit().await?;

        Ok(game)
    }

    /// Unlinks one catalog entry from a game. Unlinking an absent pair is a no-op.
    pub async fn remove_association(
        &self,
        kind: AssociationKind,
        game_id: i32,
        target_id: i32,
    ) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        let game = self.load(&txn, game_id).await?;

        if AssociationRepository::new(&txn)
            .remove(kind, game_id, target_id)
            .await?
        {
            self.touch(&txn, &game).await?;
        }

        let game = self.load(&txn, game_id).await?;

        txn.commit().await?;

        Ok(game)
    }

    async fn update_associations(
        &self,
        kind: AssociationKind,
        game_id: i32,
        ids: Option<Vec<i32>>,
        mode: AssociationUpdate,
    ) -> Result<Game, AppError> {
        let ids = ids.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::IdsMissing))
        })?;

        let txn = self.db.begin().await?;
        let associations = AssociationRepository::new(&txn);

        let game = self.load(&txn, game_id).await?;

        let requested: BTreeSet<i32> = ids.into_iter().collect();
        let resolved = CatalogRepository::new(&txn)
            .existing_ids(kind, &requested)
            .await?;
        if resolved.len() < requested.len() {
            tracing::debug!(
                "Dropped {} unresolved {} ids for game {}",
                requested.len() - resolved.len(),
                kind,
                game_id
            );
        }

        let current: BTreeSet<i32> = associations
            .target_ids(kind, game_id)
            .await?
            .into_iter()
            .collect();

        let mut changed = false;

        if mode == AssociationUpdate::Replace {
            for target_id in current.difference(&resolved) {
                changed |= associations.remove(kind, game_id, *target_id).await?;
            }
        }
        for target_id in resolved.difference(&current) {
            changed |= associations.add(kind, game_id, *target_id).await?;
        }

        if changed {
            self.touch(&txn, &game).await?;
        }

        let game = self.load(&txn, game_id).await?;

        txn.commit().await?;

        Ok(game)
    }

    /// Bumps the game's version after an association change.
    async fn touch<C: ConnectionTrait>(&self, db: &C, game: &Game) -> Result<(), AppError> {
        let repo = GameRepository::new(db);

        if repo.touch(game.id, game.version, Utc::now()).await? == 0 {
            return Err(self.stale_or_missing(&repo, game.id).await);
        }

        Ok(())
    }

    /// Loads a game with its modes, failing with NotFound when absent.
    async fn load<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<Game, AppError> {
        let repo = GameRepository::new(db);

        let Some(game) = repo.find_by_id(id).await? else {
            return Err(self.game_not_found(id));
        };
        let modes = repo.find_modes(id).await?;

        Ok(Game::from_entity(game, modes)?)
    }

    /// Pairs game rows with their modes.
    async fn assemble<C: ConnectionTrait>(
        &self,
        repo: &GameRepository<'_, C>,
        games: Vec<entity::game::Model>,
    ) -> Result<Vec<Game>, AppError> {
        let ids: Vec<i32> = games.iter().map(|game| game.id).collect();
        let mut modes = repo.find_modes_for(&ids).await?;

        games
            .into_iter()
            .map(|game| {
                let game_modes = modes.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, game_modes).map_err(AppError::from)
            })
            .collect()
    }

    /// Error for a compare-and-swap that matched no row.
    async fn stale_or_missing<C: ConnectionTrait>(
        &self,
        repo: &GameRepository<'_, C>,
        id: i32,
    ) -> AppError {
        match repo.exists(id).await {
            Ok(true) => {
                tracing::debug!("Rejected stale update of game {}", id);
                AppError::ConcurrencyConflict(self.messages.get(MessageKey::VersionConflict, id))
            }
            Ok(false) => self.game_not_found(id),
            Err(err) => err.into(),
        }
    }

    fn require_page(&self, page: Option<PageRequest>) -> Result<PageRequest, AppError> {
        let page = page.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::PageRequestMissing))
        })?;
        page.validate()?;

        Ok(page)
    }

    async fn require_franchise<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<(), AppError> {
        if !FranchiseRepository::new(db).exists(id).await? {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::FranchiseNotFound, id),
            ));
        }

        Ok(())
    }

    async fn require_entry<C: ConnectionTrait>(
        &self,
        db: &C,
        kind: AssociationKind,
        id: i32,
    ) -> Result<(), AppError> {
        if !CatalogRepository::new(db).exists(kind, id).await? {
            return Err(AppError::NotFound(
                self.messages.get(kind.not_found_key(), id),
            ));
        }

        Ok(())
    }

    fn game_not_found(&self, id: i32) -> AppError {
        AppError::NotFound(self.messages.get(MessageKey::GameNotFound, id))
    }
}
