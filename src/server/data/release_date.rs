use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::release_date::NewReleaseDate;

pub struct ReleaseDateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReleaseDateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Release dates of a game ordered by region.
    pub async fn find_for_game(
        &self,
        game_id: i32,
    ) -> Result<Vec<entity::game_release_date::Model>, DbErr> {
        entity::prelude::GameReleaseDate::find()
            .filter(entity::game_release_date::Column::GameId.eq(game_id))
            .order_by_asc(entity::game_release_date::Column::Region)
            .all(self.db)
            .await
    }

    /// Adds a release date, replacing the date of the same region if one exists.
    ///
    /// A replaced row keeps its id and has its version incremented.
    pub async fn upsert(
        &self,
        game_id: i32,
        release: NewReleaseDate,
        now: DateTime<Utc>,
    ) -> Result<entity::game_release_date::Model, DbErr> {
        let existing = entity::prelude::GameReleaseDate::find()
            .filter(entity::game_release_date::Column::GameId.eq(game_id))
            .filter(entity::game_release_date::Column::Region.eq(release.region.as_str()))
            .one(self.db)
            .await?;

        match existing {
            Some(row) => {
                let version = row.version;
                let mut active: entity::game_release_date::ActiveModel = row.into();
                active.release_date = ActiveValue::Set(release.release_date);
                active.updated_at = ActiveValue::Set(now);
                active.version = ActiveValue::Set(version + 1);

                active.update(self.db).await
            }
            None => {
                entity::game_release_date::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    region: ActiveValue::Set(release.region.as_str().to_string()),
                    release_date: ActiveValue::Set(release.release_date),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    version: ActiveValue::Set(0),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Deletes one release date of a game.
    ///
    /// # Returns
    /// - `Ok(1)` - Deleted
    /// - `Ok(0)` - No release date with that id belongs to the game
    pub async fn delete(&self, game_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameReleaseDate::delete_many()
            .filter(entity::game_release_date::Column::Id.eq(id))
            .filter(entity::game_release_date::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_game(&self, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameReleaseDate::delete_many()
            .filter(entity::game_release_date::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
