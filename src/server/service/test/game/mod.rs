use crate::{
    model::game::{AgeRating, GameMode},
    server::{
        error::AppError,
        i18n::Messages,
        model::{
            association::AssociationKind,
            filter::GameFilter,
            game::{CreateGameParams, UpdateGameParams},
            page::PageRequest,
            patch::GamePatch,
        },
        service::{catalog::CatalogService, game::GameService},
    },
};
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod associations;
mod create;
mod delete;
mod patch;
mod query;
mod update;

/// Ids of the genres linked to a game, as seen from the game's side.
async fn genre_ids(
    db: &sea_orm::DatabaseConnection,
    game_id: i32,
) -> Result<Vec<i32>, AppError> {
    let mut ids: Vec<i32> = CatalogService::new(db, Messages::default())
        .find_for_game_id(AssociationKind::Genre, game_id)
        .await?
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    ids.sort();

    Ok(ids)
}
