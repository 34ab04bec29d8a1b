//! Release date domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        game::{CreateReleaseDateDto, GameRegion, ReleaseDateDto},
        link::links,
    },
    server::error::{internal::InternalError, validation::ValidationError},
};

/// Release date of a game in one region.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseDate {
    pub id: i32,
    pub game_id: i32,
    pub region: GameRegion,
    pub release_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl ReleaseDate {
    /// Converts the entity model, failing when the stored region has no variant.
    pub fn from_entity(entity: entity::game_release_date::Model) -> Result<Self, InternalError> {
        let region = GameRegion::from_str_value(&entity.region).ok_or(
            InternalError::UnknownStoredValue {
                field: "game_release_date.region",
                value: entity.region.clone(),
            },
        )?;

        Ok(Self {
            id: entity.id,
            game_id: entity.game_id,
            region,
            release_date: entity.release_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        })
    }

    pub fn into_dto(self) -> ReleaseDateDto {
        let game = format!("/api/games/{}", self.game_id);

        ReleaseDateDto {
            id: self.id,
            game_id: self.game_id,
            region: self.region,
            release_date: self.release_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            links: links([
                ("self", format!("{game}/release-dates/{}", self.id)),
                ("game", game),
            ]),
        }
    }
}

/// Release date as submitted; region and date may still be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReleaseDateParams {
    pub region: Option<GameRegion>,
    pub release_date: Option<NaiveDate>,
}

/// Release date that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReleaseDate {
    pub region: GameRegion,
    pub release_date: NaiveDate,
}

impl CreateReleaseDateParams {
    pub fn from_dto(dto: CreateReleaseDateDto) -> Self {
        Self {
            region: dto.region,
            release_date: dto.release_date,
        }
    }

    /// Requires both region and date.
    pub fn validate(self) -> Result<NewReleaseDate, ValidationError> {
        let region = self
            .region
            .ok_or(ValidationError::Required { field: "region" })?;
        let release_date = self.release_date.ok_or(ValidationError::Required {
            field: "release_date",
        })?;

        Ok(NewReleaseDate {
            region,
            release_date,
        })
    }
}
