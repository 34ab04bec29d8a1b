use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        game::{CreateDownloadableContentDto, DownloadableContentDto},
        link::links,
    },
    server::{error::validation::ValidationError, util::validate},
};

/// Expansion or add-on content owned by a game.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadableContent {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl DownloadableContent {
    pub fn from_entity(entity: entity::downloadable_content::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            description: entity.description,
            release_date: entity.release_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        }
    }

    pub fn into_dto(self) -> DownloadableContentDto {
        let game = format!("/api/games/{}", self.game_id);

        DownloadableContentDto {
            id: self.id,
            game_id: self.game_id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            links: links([
                ("self", format!("{game}/downloadable-contents/{}", self.id)),
                ("game", game),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDownloadableContentParams {
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl CreateDownloadableContentParams {
    pub fn from_dto(dto: CreateDownloadableContentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            release_date: dto.release_date,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text("name", &self.name)?;
        validate::description(self.description.as_deref())
    }
}
