use sea_orm::entity::prelude::*;

/// A hardware or software platform games are released on.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "platform")]
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
    #[sea_orm(has_many = "super::game_platform::Entity")]
    GamePlatform,
    #[sea_orm(has_many = "super::game_barcode::Entity")]
    GameBarcode,
}

impl Related<super::game_platform::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlatform.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_platform::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_platform::Relation::Platform.def().rev())
    }
}

impl Related<super::game_barcode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameBarcode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
