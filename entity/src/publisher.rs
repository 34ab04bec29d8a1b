use sea_orm::entity::prelude::*;

/// A company publishing games.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publisher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_publisher::Entity")]
    GamePublisher,
}

impl Related<super::game_publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePublisher.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_publisher::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_publisher::Relation::Publisher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
