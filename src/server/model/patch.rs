//! Merge-patch documents for games.
//!
//! A [`GamePatch`] is a typed field mask read from an `application/merge-patch+json` body.
//! Absent fields leave the current value untouched, fields set to `null` clear nullable
//! values, and unknown fields (including `id`) are ignored. The outer `Option` records
//! whether a field was present, the inner one whether it was `null`.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

use crate::{
    model::game::{AgeRating, GameMode},
    server::model::game::UpdateGameParams,
};

/// Partial game document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GamePatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age_rating: Option<Option<AgeRating>>,
    #[serde(default, deserialize_with = "present")]
    pub franchise_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub game_modes: Option<Option<BTreeSet<GameMode>>>,
    /// Expected version; the stored version is used when absent.
    pub version: Option<i32>,
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl GamePatch {
    /// Merges the patch onto the current state of a game.
    ///
    /// A `null` title becomes an empty title so the merged result fails validation the same
    /// way a blank title in a full update does. A `null` rating resets to `RATING_PENDING`
    /// and `null` modes clear the set. The id is never altered.
    pub fn apply(self, mut current: UpdateGameParams) -> UpdateGameParams {
        if let Some(title) = self.title {
            current.title = title.unwrap_or_default();
        }
        if let Some(description) = self.description {
            current.description = description;
        }
        if let Some(age_rating) = self.age_rating {
            current.age_rating = Some(age_rating.unwrap_or_default());
        }
        if let Some(franchise_id) = self.franchise_id {
            current.franchise_id = franchise_id;
        }
        if let Some(game_modes) = self.game_modes {
            current.game_modes = game_modes.unwrap_or_default();
        }
        if let Some(version) = self.version {
            current.version = version;
        }

        current
    }
}
