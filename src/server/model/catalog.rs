//! Catalog entry domain models and parameters.
//!
//! Genres, platforms, publishers and developers share one shape and one set of operations;
//! [`AssociationKind`] tells them apart.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::{
            CatalogEntryDto, CreateCatalogEntryDto, PaginatedCatalogEntriesDto,
            UpdateCatalogEntryDto,
        },
        link::links,
    },
    server::{
        error::validation::ValidationError,
        model::{association::AssociationKind, page::Page},
        util::validate,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub kind: AssociationKind,
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl CatalogEntry {
    pub fn into_dto(self) -> CatalogEntryDto {
        let base = format!("/api/{}/{}", self.kind.path(), self.id);

        CatalogEntryDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            links: links([("self", base.clone()), ("games", format!("{base}/games"))]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCatalogEntryParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCatalogEntryParams {
    pub fn from_dto(dto: CreateCatalogEntryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text("name", &self.name)?;
        validate::description(self.description.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCatalogEntryParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub version: i32,
}

impl UpdateCatalogEntryParams {
    pub fn from_dto(id: i32, dto: UpdateCatalogEntryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            version: dto.version,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text("name", &self.name)?;
        validate::description(self.description.as_deref())
    }
}

impl Page<CatalogEntry> {
    pub fn into_dto(self) -> PaginatedCatalogEntriesDto {
        let total_pages = self.total_pages();

        PaginatedCatalogEntriesDto {
            entries: self.items.into_iter().map(CatalogEntry::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
