//! Game to catalog entry associations.
//!
//! Each association kind has its own join table holding `(game_id, target_id)` rows. A row is
//! the single source of truth for both directions: a genre is among a game's genres exactly
//! when the game is among the genre's games. Adding and removing therefore keep both sides
//! consistent by construction.
//!
//! The join modules share one shape (`TARGET`, `link()`, `Model::target_id()`), which lets
//! [`with_link!`] dispatch a single body over every kind.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::association::AssociationKind;

/// Runs `$body` with `$link` bound to the join table module of `$kind`.
macro_rules! with_link {
    ($kind:expr, $link:ident => $body:expr) => {
        match $kind {
            $crate::server::model::association::AssociationKind::Genre => {
                use entity::game_genre as $link;
                $body
            }
            $crate::server::model::association::AssociationKind::Platform => {
                use entity::game_platform as $link;
                $body
            }
            $crate::server::model::association::AssociationKind::Publisher => {
                use entity::game_publisher as $link;
                $body
            }
            $crate::server::model::association::AssociationKind::Developer => {
                use entity::game_developer as $link;
                $body
            }
        }
    };
}

pub(crate) use with_link;

pub struct AssociationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssociationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ids of the catalog entries of `kind` linked to a game, ascending.
    pub async fn target_ids(&self, kind: AssociationKind, game_id: i32) -> Result<Vec<i32>, DbErr> {
        with_link!(kind, link => {
            let rows = link::Entity::find()
                .filter(link::Column::GameId.eq(game_id))
                .order_by_asc(link::TARGET)
                .all(self.db)
                .await?;

            Ok(rows.iter().map(link::Model::target_id).collect())
        })
    }

    /// Ids of the games linked to a catalog entry of `kind`, ascending.
    pub async fn game_ids(&self, kind: AssociationKind, target_id: i32) -> Result<Vec<i32>, DbErr> {
        with_link!(kind, link => {
            let rows = link::Entity::find()
                .filter(link::TARGET.eq(target_id))
                .order_by_asc(link::Column::GameId)
                .all(self.db)
                .await?;

            Ok(rows.into_iter().map(|row| row.game_id).collect())
        })
    }

    pub async fn contains(
        &self,
        kind: AssociationKind,
        game_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        with_link!(kind, link => {
            let row = link::Entity::find()
                .filter(link::Column::GameId.eq(game_id))
                .filter(link::TARGET.eq(target_id))
                .one(self.db)
                .await?;

            Ok(row.is_some())
        })
    }

    /// Links a game to a catalog entry. Linking an existing pair is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - A new link was created
    /// - `Ok(false)` - The pair was already linked
    /// - `Err(DbErr)` - Database error, including a foreign key failure for unknown ids
    pub async fn add(
        &self,
        kind: AssociationKind,
        game_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        if self.contains(kind, game_id, target_id).await? {
            return Ok(false);
        }

        with_link!(kind, link => {
            link::Entity::insert(link::link(game_id, target_id))
                .exec_without_returning(self.db)
                .await?;
        });

        Ok(true)
    }

    /// Unlinks a game from a catalog entry. Unlinking an absent pair is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - A link was removed
    /// - `Ok(false)` - The pair was not linked
    pub async fn remove(
        &self,
        kind: AssociationKind,
        game_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let result = with_link!(kind, link => {
            link::Entity::delete_many()
                .filter(link::Column::GameId.eq(game_id))
                .filter(link::TARGET.eq(target_id))
                .exec(self.db)
                .await?
        });

        Ok(result.rows_affected > 0)
    }

    /// Removes every link of `kind` for a game.
    pub async fn remove_all_for_game(
        &self,
        kind: AssociationKind,
        game_id: i32,
    ) -> Result<u64, DbErr> {
        let result = with_link!(kind, link => {
            link::Entity::delete_many()
                .filter(link::Column::GameId.eq(game_id))
                .exec(self.db)
                .await?
        });

        Ok(result.rows_affected)
    }

    /// Removes every link to a catalog entry of `kind`.
    pub async fn remove_all_for_target(
        &self,
        kind: AssociationKind,
        target_id: i32,
    ) -> Result<u64, DbErr> {
        let result = with_link!(kind, link => {
            link::Entity::delete_many()
                .filter(link::TARGET.eq(target_id))
                .exec(self.db)
                .await?
        });

        Ok(result.rows_affected)
    }
}
