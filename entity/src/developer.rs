use sea_orm::entity::prelude::*;

/// A studio developing games.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "developer")]
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
    #[sea_orm(has_many = "super::game_developer::Entity")]
    GameDeveloper,
}

impl Related<super::game_developer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameDeveloper.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_developer::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_developer::Relation::Developer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
