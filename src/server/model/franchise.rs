use chrono::{DateTime, Utc};

use crate::{
    model::{
        franchise::{CreateFranchiseDto, FranchiseDto, PaginatedFranchisesDto, UpdateFranchiseDto},
        link::links,
    },
    server::{error::validation::ValidationError, model::page::Page, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Franchise {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl Franchise {
    pub fn from_entity(entity: entity::franchise::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        }
    }

    pub fn into_dto(self) -> FranchiseDto {
        let base = format!("/api/franchises/{}", self.id);

        FranchiseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            links: links([("self", base.clone()), ("games", format!("{base}/games"))]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFranchiseParams {
    pub title: String,
    pub description: Option<String>,
}

impl CreateFranchiseParams {
    pub fn from_dto(dto: CreateFranchiseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text("title", &self.title)?;
        validate::description(self.description.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFranchiseParams {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub version: i32,
}

impl UpdateFranchiseParams {
    pub fn from_dto(id: i32, dto: UpdateFranchiseDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            version: dto.version,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text("title", &self.title)?;
        validate::description(self.description.as_deref())
    }
}

impl Page<Franchise> {
    pub fn into_dto(self) -> PaginatedFranchisesDto {
        let total_pages = self.total_pages();

        PaginatedFranchisesDto {
            franchises: self.items.into_iter().map(Franchise::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
