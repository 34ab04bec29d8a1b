use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::franchise::{CreateFranchiseParams, UpdateFranchiseParams};

pub struct FranchiseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FranchiseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateFranchiseParams,
        now: DateTime<Utc>,
    ) -> Result<entity::franchise::Model, DbErr> {
        entity::franchise::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::franchise::Model>, DbErr> {
        entity::prelude::Franchise::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Franchise::find()
            .filter(entity::franchise::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of franchises ordered by title, with the total count.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::franchise::Model>, u64), DbErr> {
        let paginator = entity::prelude::Franchise::find()
            .order_by_asc(entity::franchise::Column::Title)
            .order_by_asc(entity::franchise::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let franchises = paginator.fetch_page(page).await?;

        Ok((franchises, total))
    }

    /// Updates title and description when the stored version equals `params.version`.
    pub async fn update_versioned(
        &self,
        params: UpdateFranchiseParams,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let Some(next_version) = params.version.checked_add(1) else {
            return Ok(0);
        };

        let result = entity::prelude::Franchise::update_many()
            .set(entity::franchise::ActiveModel {
                title: ActiveValue::Set(params.title),
                description: ActiveValue::Set(params.description),
                updated_at: ActiveValue::Set(now),
                version: ActiveValue::Set(next_version),
                ..Default::default()
            })
            .filter(entity::franchise::Column::Id.eq(params.id))
            .filter(entity::franchise::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Franchise::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
