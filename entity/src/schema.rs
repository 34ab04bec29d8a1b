//! Schema statements derived from the entity definitions.
//!
//! The catalog does not ship migrations; the schema is created from the entities with
//! `CREATE TABLE IF NOT EXISTS` on startup and in tests. Tables are listed in dependency order
//! so foreign keys always reference an existing table.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};

use crate::prelude::*;

fn table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

/// CREATE TABLE statements for every catalog table.
pub fn table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);

    vec![
        table(&schema, Franchise),
        table(&schema, Genre),
        table(&schema, Platform),
        table(&schema, Publisher),
        table(&schema, Developer),
        table(&schema, Game),
        table(&schema, GameGenre),
        table(&schema, GamePlatform),
        table(&schema, GamePublisher),
        table(&schema, GameDeveloper),
        table(&schema, GameMode),
        table(&schema, GameReleaseDate),
        table(&schema, DownloadableContent),
        table(&schema, GameBarcode),
    ]
}

/// Indexes the entity attributes cannot express.
pub fn index_statements() -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_game_release_date_game_region")
        .table(GameReleaseDate)
        .col(crate::game_release_date::Column::GameId)
        .col(crate::game_release_date::Column::Region)
        .unique()
        .if_not_exists()
        .to_owned()]
}
