use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::link::Links;

/// Retail barcode symbology.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, ToSchema)]
pub enum BarcodeType {
    #[serde(rename = "UPC_A")]
    UpcA,
    #[serde(rename = "EAN_13")]
    Ean13,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBarcodeDto {
    pub game_id: i32,
    pub platform_id: i32,
    pub barcode: String,
    pub barcode_type: BarcodeType,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BarcodeDto {
    pub id: i32,
    pub game_id: i32,
    pub platform_id: i32,
    pub barcode: String,
    pub barcode_type: BarcodeType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedBarcodesDto {
    pub barcodes: Vec<BarcodeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
