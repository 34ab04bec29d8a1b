//! Factories for the catalog lookup entities.
//!
//! Genres, platforms, publishers and developers share the same shape, so each gets a
//! `create_*` function with a unique default name and a `create_*_named` variant.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a genre with a unique default name.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    create_genre_named(db, format!("Genre {}", next_id())).await
}

/// Creates a genre with the provided name.
pub async fn create_genre_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::genre::Model, DbErr> {
    let now = now();

    entity::genre::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}

/// Creates a platform with a unique default name.
pub async fn create_platform(db: &DatabaseConnection) -> Result<entity::platform::Model, DbErr> {
    create_platform_named(db, format!("Platform {}", next_id())).await
}

/// Creates a platform with the provided name.
pub async fn create_platform_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::platform::Model, DbErr> {
    let now = now();

    entity::platform::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}

/// Creates a publisher with a unique default name.
pub async fn create_publisher(db: &DatabaseConnection) -> Result<entity::publisher::Model, DbErr> {
    create_publisher_named(db, format!("Publisher {}", next_id())).await
}

/// Creates a publisher with the provided name.
pub async fn create_publisher_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::publisher::Model, DbErr> {
    let now = now();

    entity::publisher::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}

/// Creates a developer with a unique default name.
pub async fn create_developer(db: &DatabaseConnection) -> Result<entity::developer::Model, DbErr> {
    create_developer_named(db, format!("Developer {}", next_id())).await
}

/// Creates a developer with the provided name.
pub async fn create_developer_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::developer::Model, DbErr> {
    let now = now();

    entity::developer::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        version: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}
