use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

/// Join row linking a game to a platform.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_platform")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub platform_id: i32,
}

/// Column holding the associated platform id.
pub const TARGET: Column = Column::PlatformId;

/// Builds the join row for a game and a platform.
pub fn link(game_id: i32, target_id: i32) -> ActiveModel {
    ActiveModel {
        game_id: ActiveValue::Set(game_id),
        platform_id: ActiveValue::Set(target_id),
    }
}

impl Model {
    pub fn target_id(&self) -> i32 {
        self.platform_id
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
        belongs_to = "super::platform::Entity",
        from = "Column::PlatformId",
        to = "super::platform::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Platform,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::platform::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Platform.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
