//! Game aggregate domain models and parameters.
//!
//! A game owns its scalar fields and play modes directly. Catalog associations, release
//! dates and downloadable content are reached through their own repositories and linked from
//! the DTO through `_links`.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::{
    model::{
        game::{AgeRating, CreateGameDto, GameDto, GameMode, PaginatedGamesDto, UpdateGameDto},
        link::links,
    },
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::{association::AssociationKind, code::PersistedCode, page::Page},
        util::validate,
    },
};

/// Game aggregate with decoded rating and play modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub age_rating: AgeRating,
    pub franchise_id: Option<i32>,
    pub game_modes: BTreeSet<GameMode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, incremented by every successful update.
    pub version: i32,
}

impl Game {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The game row
    /// - `modes` - The game's mode rows
    ///
    /// # Returns
    /// - `Ok(Game)` - Successfully converted domain model
    /// - `Err(InternalError::UnknownCode)` - Stored age rating has no variant
    /// - `Err(InternalError::UnknownStoredValue)` - Stored mode has no variant
    pub fn from_entity(
        entity: entity::game::Model,
        modes: Vec<entity::game_mode::Model>,
    ) -> Result<Self, InternalError> {
        let game_modes = modes
            .into_iter()
            .map(|row| {
                GameMode::from_str_value(&row.mode).ok_or(InternalError::UnknownStoredValue {
                    field: "game_mode.mode",
                    value: row.mode,
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            age_rating: AgeRating::decode_optional(entity.age_rating)?,
            franchise_id: entity.franchise_id,
            game_modes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        })
    }

    /// Converts domain model to DTO for API responses, attaching hypermedia links.
    pub fn into_dto(self) -> GameDto {
        let base = format!("/api/games/{}", self.id);

        let mut pairs = vec![
            ("self".to_string(), base.clone()),
            ("release_dates".to_string(), format!("{base}/release-dates")),
            (
                "downloadable_contents".to_string(),
                format!("{base}/downloadable-contents"),
            ),
        ];
        pairs.extend(
            AssociationKind::ALL
                .into_iter()
                .map(|kind| (kind.path().to_string(), format!("{base}/{}", kind.path()))),
        );
        if let Some(franchise_id) = self.franchise_id {
            pairs.push((
                "franchise".to_string(),
                format!("/api/franchises/{franchise_id}"),
            ));
        }

        GameDto {
            id: self.id,
            title: self.title,
            description: self.description,
            age_rating: self.age_rating,
            franchise_id: self.franchise_id,
            game_modes: self.game_modes.into_iter().collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            links: links(pairs),
        }
    }
}

/// Parameters for creating a game.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameParams {
    pub title: String,
    pub description: Option<String>,
    /// Absent ratings are stored as `RATING_PENDING`.
    pub age_rating: Option<AgeRating>,
    pub franchise_id: Option<i32>,
    pub game_modes: BTreeSet<GameMode>,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            age_rating: dto.age_rating,
            franchise_id: dto.franchise_id,
            game_modes: dto.game_modes,
        }
    }

    /// Checks title and description rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

/// Parameters for replacing a game's scalar fields and modes.
///
/// `version` is the version the caller last read; the update is rejected when the stored
/// version differs.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGameParams {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub age_rating: Option<AgeRating>,
    pub franchise_id: Option<i32>,
    pub game_modes: BTreeSet<GameMode>,
    pub version: i32,
}

impl UpdateGameParams {
    pub fn from_dto(id: i32, dto: UpdateGameDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            age_rating: dto.age_rating,
            franchise_id: dto.franchise_id,
            game_modes: dto.game_modes,
            version: dto.version,
        }
    }

    /// Current state of a game expressed as update parameters, the base a patch merges onto.
    pub fn from_game(game: &Game) -> Self {
        Self {
            id: game.id,
            title: game.title.clone(),
            description: game.description.clone(),
            age_rating: Some(game.age_rating),
            franchise_id: game.franchise_id,
            game_modes: game.game_modes.clone(),
            version: game.version,
        }
    }

    /// Checks title and description rules, identical to creation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

fn validate_fields(title: &str, description: Option<&str>) -> Result<(), ValidationError> {
    validate::require_text("title", title)?;
    validate::description(description)?;

    Ok(())
}

impl Page<Game> {
    pub fn into_dto(self) -> PaginatedGamesDto {
        let total_pages = self.total_pages();

        PaginatedGamesDto {
            games: self.items.into_iter().map(Game::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
