use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::link::Links;

/// Request body for creating a genre, platform, publisher or developer.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCatalogEntryDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCatalogEntryDto {
    pub name: String,
    pub description: Option<String>,
    pub version: i32,
}

/// A genre, platform, publisher or developer. `kind` names which one.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CatalogEntryDto {
    pub id: i32,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedCatalogEntriesDto {
    pub entries: Vec<CatalogEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
