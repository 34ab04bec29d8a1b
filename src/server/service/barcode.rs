use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{barcode::BarcodeRepository, catalog::CatalogRepository, game::GameRepository},
    error::AppError,
    i18n::{MessageKey, Messages},
    model::{
        association::AssociationKind,
        barcode::{Barcode, CreateBarcodeParams},
        page::{Page, PageRequest},
    },
};

pub struct BarcodeService<'a> {
    db: &'a DatabaseConnection,
    messages: Messages,
}

impl<'a> BarcodeService<'a> {
    pub fn new(db: &'a DatabaseConnection, messages: Messages) -> Self {
        Self { db, messages }
    }

    /// Records a barcode for a game on a platform.
    ///
    /// # Returns
    /// - `Ok(Barcode)` - The stored barcode
    /// - `Err(AppError::ValidationErr)` - Digit count does not match the barcode type
    /// - `Err(AppError::NotFound)` - Game or platform does not exist
    /// - `Err(AppError::DbErr)` - Barcode value already recorded (409)
    pub async fn create(&self, params: CreateBarcodeParams) -> Result<Barcode, AppError> {
        params.validate()?;

        if !GameRepository::new(self.db).exists(params.game_id).await? {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::GameNotFound, params.game_id),
            ));
        }
        if !CatalogRepository::new(self.db)
            .exists(AssociationKind::Platform, params.platform_id)
            .await?
        {
            return Err(AppError::NotFound(
                self.messages
                    .get(MessageKey::PlatformNotFound, params.platform_id),
            ));
        }

        let row = BarcodeRepository::new(self.db)
            .create(params, Utc::now())
            .await?;

        tracing::info!("Recorded barcode {} for game {}", row.barcode, row.game_id);

        Ok(Barcode::from_entity(row)?)
    }

    pub async fn find_by_barcode(&self, barcode: &str) -> Result<Barcode, AppError> {
        let Some(row) = BarcodeRepository::new(self.db)
            .find_by_barcode(barcode.trim())
            .await?
        else {
            return Err(AppError::NotFound(
                self.messages.get(MessageKey::BarcodeNotFound, barcode),
            ));
        };

        Ok(Barcode::from_entity(row)?)
    }

    pub async fn get_paginated(&self, page: Option<PageRequest>) -> Result<Page<Barcode>, AppError> {
        let page = page.ok_or_else(|| {
            AppError::InvalidArgument(self.messages.text(MessageKey::PageRequestMissing))
        })?;
        page.validate()?;

        let (rows, total) = BarcodeRepository::new(self.db)
            .get_paginated(page.page, page.per_page)
            .await?;

        let barcodes = rows
            .into_iter()
            .map(Barcode::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items: barcodes,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }
}
