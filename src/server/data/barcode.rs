use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{barcode::CreateBarcodeParams, code::PersistedCode};

pub struct BarcodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BarcodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateBarcodeParams,
        now: DateTime<Utc>,
    ) -> Result<entity::game_barcode::Model, DbErr> {
        entity::game_barcode::ActiveModel {
            game_id: ActiveValue::Set(params.game_id),
            platform_id: ActiveValue::Set(params.platform_id),
            barcode: ActiveValue::Set(params.barcode),
            barcode_type: ActiveValue::Set(params.barcode_type.code()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<entity::game_barcode::Model>, DbErr> {
        entity::prelude::GameBarcode::find()
            .filter(entity::game_barcode::Column::Barcode.eq(barcode))
            .one(self.db)
            .await
    }

    /// Gets a page of barcodes ordered by barcode value, with the total count.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::game_barcode::Model>, u64), DbErr> {
        let paginator = entity::prelude::GameBarcode::find()
            .order_by_asc(entity::game_barcode::Column::Barcode)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let barcodes = paginator.fetch_page(page).await?;

        Ok((barcodes, total))
    }

    pub async fn delete_for_game(&self, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameBarcode::delete_many()
            .filter(entity::game_barcode::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_platform(&self, platform_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameBarcode::delete_many()
            .filter(entity::game_barcode::Column::PlatformId.eq(platform_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
