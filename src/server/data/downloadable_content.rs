use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::downloadable_content::CreateDownloadableContentParams;

pub struct DownloadableContentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DownloadableContentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Downloadable content of a game ordered by name.
    pub async fn find_for_game(
        &self,
        game_id: i32,
    ) -> Result<Vec<entity::downloadable_content::Model>, DbErr> {
        entity::prelude::DownloadableContent::find()
            .filter(entity::downloadable_content::Column::GameId.eq(game_id))
            .order_by_asc(entity::downloadable_content::Column::Name)
            .order_by_asc(entity::downloadable_content::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        game_id: i32,
        params: CreateDownloadableContentParams,
        now: DateTime<Utc>,
    ) -> Result<entity::downloadable_content::Model, DbErr> {
        entity::downloadable_content::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            release_date: ActiveValue::Set(params.release_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes one downloadable content of a game.
    pub async fn delete(&self, game_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DownloadableContent::delete_many()
            .filter(entity::downloadable_content::Column::Id.eq(id))
            .filter(entity::downloadable_content::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_game(&self, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DownloadableContent::delete_many()
            .filter(entity::downloadable_content::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
