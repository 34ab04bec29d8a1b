use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

use crate::model::link::Links;

/// Content rating of a game. Absent ratings are treated as `RATING_PENDING`.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeRating {
    #[default]
    RatingPending,
    EarlyChildhood,
    Everyone,
    EveryoneTenPlus,
    Teen,
    Mature,
    AdultsOnly,
}

/// Market region a release date applies to.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameRegion {
    Pal,
    NtscU,
    NtscJ,
}

impl GameRegion {
    pub const ALL: [GameRegion; 3] = [GameRegion::Pal, GameRegion::NtscU, GameRegion::NtscJ];

    /// Stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            GameRegion::Pal => "PAL",
            GameRegion::NtscU => "NTSC_U",
            GameRegion::NtscJ => "NTSC_J",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.as_str() == value)
    }
}

/// Way a game can be played.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
    CoOperative,
    OnlineMultiplayer,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::SinglePlayer,
        GameMode::Multiplayer,
        GameMode::CoOperative,
        GameMode::OnlineMultiplayer,
    ];

    /// Stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "SINGLE_PLAYER",
            GameMode::Multiplayer => "MULTIPLAYER",
            GameMode::CoOperative => "CO_OPERATIVE",
            GameMode::OnlineMultiplayer => "ONLINE_MULTIPLAYER",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGameDto {
    pub title: String,
    pub description: Option<String>,
    pub age_rating: Option<AgeRating>,
    pub franchise_id: Option<i32>,
    #[serde(default)]
    pub game_modes: BTreeSet<GameMode>,
}

/// Full replacement of a game's scalar fields and modes.
///
/// Also documents the accepted fields of a merge-patch document, where every field is
/// optional and `description`, `franchise_id` and `age_rating` may be `null`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateGameDto {
    pub title: String,
    pub description: Option<String>,
    pub age_rating: Option<AgeRating>,
    pub franchise_id: Option<i32>,
    #[serde(default)]
    pub game_modes: BTreeSet<GameMode>,
    pub version: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub age_rating: AgeRating,
    pub franchise_id: Option<i32>,
    pub game_modes: Vec<GameMode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedGamesDto {
    pub games: Vec<GameDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReleaseDateDto {
    pub region: Option<GameRegion>,
    pub release_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReleaseDateDto {
    pub id: i32,
    pub game_id: i32,
    pub region: GameRegion,
    pub release_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDownloadableContentDto {
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DownloadableContentDto {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}
