use sea_orm::entity::prelude::*;

/// Root aggregate of the catalog.
///
/// `age_rating` holds the persisted small-integer code of the rating; the server decodes it
/// through its code table and reads `NULL` as pending. `version` is the optimistic concurrency token and is compared and
/// incremented by every update.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub age_rating: Option<i16>,
    pub franchise_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::franchise::Entity",
        from = "Column::FranchiseId",
        to = "super::franchise::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Franchise,
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenre,
    #[sea_orm(has_many = "super::game_platform::Entity")]
    GamePlatform,
    #[sea_orm(has_many = "super::game_publisher::Entity")]
    GamePublisher,
    #[sea_orm(has_many = "super::game_developer::Entity")]
    GameDeveloper,
    #[sea_orm(has_many = "super::game_mode::Entity")]
    GameMode,
    #[sea_orm(has_many = "super::game_release_date::Entity")]
    GameReleaseDate,
    #[sea_orm(has_many = "super::downloadable_content::Entity")]
    DownloadableContent,
    #[sea_orm(has_many = "super::game_barcode::Entity")]
    GameBarcode,
}

impl Related<super::franchise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Franchise.def()
    }
}

impl Related<super::game_mode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMode.def()
    }
}

impl Related<super::game_release_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameReleaseDate.def()
    }
}

impl Related<super::downloadable_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DownloadableContent.def()
    }
}

impl Related<super::game_barcode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameBarcode.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_genre::Relation::Game.def().rev())
    }
}

impl Related<super::platform::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_platform::Relation::Platform.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_platform::Relation::Game.def().rev())
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_publisher::Relation::Publisher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_publisher::Relation::Game.def().rev())
    }
}

impl Related<super::developer::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_developer::Relation::Developer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_developer::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
