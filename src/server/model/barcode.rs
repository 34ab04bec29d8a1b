//! Game barcode domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        barcode::{BarcodeDto, BarcodeType, CreateBarcodeDto, PaginatedBarcodesDto},
        link::links,
    },
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::{code::PersistedCode, page::Page},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    pub id: i32,
    pub game_id: i32,
    pub platform_id: i32,
    pub barcode: String,
    pub barcode_type: BarcodeType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl Barcode {
    pub fn from_entity(entity: entity::game_barcode::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            game_id: entity.game_id,
            platform_id: entity.platform_id,
            barcode: entity.barcode,
            barcode_type: BarcodeType::decode(entity.barcode_type)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        })
    }

    pub fn into_dto(self) -> BarcodeDto {
        BarcodeDto {
            links: links([
                ("self", format!("/api/barcodes/{}", self.barcode)),
                ("game", format!("/api/games/{}", self.game_id)),
                ("platform", format!("/api/platforms/{}", self.platform_id)),
            ]),
            id: self.id,
            game_id: self.game_id,
            platform_id: self.platform_id,
            barcode: self.barcode,
            barcode_type: self.barcode_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBarcodeParams {
    pub game_id: i32,
    pub platform_id: i32,
    pub barcode: String,
    pub barcode_type: BarcodeType,
}

impl CreateBarcodeParams {
    pub fn from_dto(dto: CreateBarcodeDto) -> Self {
        Self {
            game_id: dto.game_id,
            platform_id: dto.platform_id,
            barcode: dto.barcode.trim().to_string(),
            barcode_type: dto.barcode_type,
        }
    }

    /// Checks the barcode has the digit count of its symbology.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (digits, reason) = match self.barcode_type {
            BarcodeType::UpcA => (12, "UPC-A barcodes have exactly 12 digits"),
            BarcodeType::Ean13 => (13, "EAN-13 barcodes have exactly 13 digits"),
        };

        if self.barcode.len() != digits || !self.barcode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "barcode",
                reason,
            });
        }

        Ok(())
    }
}

impl Page<Barcode> {
    pub fn into_dto(self) -> PaginatedBarcodesDto {
        let total_pages = self.total_pages();

        PaginatedBarcodesDto {
            barcodes: self.items.into_iter().map(Barcode::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(barcode: &str, barcode_type: BarcodeType) -> CreateBarcodeParams {
        CreateBarcodeParams {
            game_id: 1,
            platform_id: 1,
            barcode: barcode.to_string(),
            barcode_type,
        }
    }

    #[test]
    fn accepts_digit_count_of_symbology() {
        assert!(params("045496590420", BarcodeType::UpcA).validate().is_ok());
        assert!(params("4006381333931", BarcodeType::Ean13).validate().is_ok());
    }

    #[test]
    fn rejects_wrong_length_or_letters() {
        assert!(params("4006381333931", BarcodeType::UpcA).validate().is_err());
        assert!(params("04549659042X", BarcodeType::UpcA).validate().is_err());
    }
}
