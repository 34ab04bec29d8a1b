//! Factories for rows owned by a game: release dates, downloadable content, play modes and
//! barcodes.
//!
//! Region, mode and barcode type are written in their persisted form (`"PAL"`,
//! `"SINGLE_PLAYER"`, `0`) since this crate sits below the server's domain enums.

use crate::factory::helpers::{next_id, now};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a release date for a game in the given region.
pub async fn create_release_date(
    db: &DatabaseConnection,
    game_id: i32,
    region: &str,
    date: NaiveDate,
) -> Result<entity::game_release_date::Model, DbErr> {
    let now = now();

    entity::game_release_date::ActiveModel {
        id: ActiveValue::NotSet,
        game_id: ActiveValue::Set(game_id),
        region: ActiveValue::Set(region.to_string()),
        release_date: ActiveValue::Set(date),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}

/// Creates downloadable content with a unique default name.
pub async fn create_dlc(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::downloadable_content::Model, DbErr> {
    let now = now();

    entity::downloadable_content::ActiveModel {
        id: ActiveValue::NotSet,
        game_id: ActiveValue::Set(game_id),
        name: ActiveValue::Set(format!("Expansion {}", next_id())),
        description: ActiveValue::Set(None),
        release_date: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}

/// Adds a play mode to a game.
pub async fn create_mode(
    db: &DatabaseConnection,
    game_id: i32,
    mode: &str,
) -> Result<entity::game_mode::Model, DbErr> {
    entity::game_mode::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        mode: ActiveValue::Set(mode.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a UPC-A barcode for a game on a platform.
///
/// The barcode value is derived from the unique counter and padded to twelve digits.
pub async fn create_barcode(
    db: &DatabaseConnection,
    game_id: i32,
    platform_id: i32,
) -> Result<entity::game_barcode::Model, DbErr> {
    let now = now();

    entity::game_barcode::ActiveModel {
        id: ActiveValue::NotSet,
        game_id: ActiveValue::Set(game_id),
        platform_id: ActiveValue::Set(platform_id),
        barcode: ActiveValue::Set(format!("{:012}", next_id())),
        barcode_type: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}
