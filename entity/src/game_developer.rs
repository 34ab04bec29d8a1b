use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

/// Join row linking a game to a developer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_developer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub developer_id: i32,
}

/// Column holding the associated developer id.
pub const TARGET: Column = Column::DeveloperId;

/// Builds the join row for a game and a developer.
pub fn link(game_id: i32, target_id: i32) -> ActiveModel {
    ActiveModel {
        game_id: ActiveValue::Set(game_id),
        developer_id: ActiveValue::Set(target_id),
    }
}

impl Model {
    pub fn target_id(&self) -> i32 {
        self.developer_id
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::developer::Entity",
        from = "Column::DeveloperId",
        to = "super::developer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Developer,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::developer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Developer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
