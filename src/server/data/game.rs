use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use std::collections::{BTreeSet, HashMap};

use crate::{
    model::game::{AgeRating, GameMode},
    server::{
        data::association::with_link,
        model::{
            filter::GameFilter,
            game::{CreateGameParams, UpdateGameParams},
            page::{PageRequest, SortDirection, SortField},
        },
    },
};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a game at version 0 together with its modes.
    pub async fn create(
        &self,
        params: CreateGameParams,
        now: DateTime<Utc>,
    ) -> Result<entity::game::Model, DbErr> {
        let game = entity::game::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            age_rating: ActiveValue::Set(Some(AgeRating::encode_optional(params.age_rating))),
            franchise_id: ActiveValue::Set(params.franchise_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_modes(game.id, &params.game_modes).await?;

        Ok(game)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Every game ordered by id.
    pub async fn find_all(&self) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of games matching `filter`, with the total count of matches.
    ///
    /// Sort orders apply in the listed order; the id breaks remaining ties so page
    /// boundaries are stable.
    pub async fn find_page(
        &self,
        filter: &GameFilter,
        page: &PageRequest,
    ) -> Result<(Vec<entity::game::Model>, u64), DbErr> {
        let mut query = filtered(filter);

        for order in &page.sort {
            let column = match order.field {
                SortField::Id => entity::game::Column::Id,
                SortField::Title => entity::game::Column::Title,
                SortField::CreatedAt => entity::game::Column::CreatedAt,
                SortField::UpdatedAt => entity::game::Column::UpdatedAt,
            };
            let direction = match order.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(column, direction);
        }
        query = query.order_by_asc(entity::game::Column::Id);

        let paginator = query.paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let games = paginator.fetch_page(page.page).await?;

        Ok((games, total))
    }

    /// Number of games matching `filter`.
    pub async fn count(&self, filter: &GameFilter) -> Result<u64, DbErr> {
        filtered(filter).count(self.db).await
    }

    /// Mode rows of one game.
    pub async fn find_modes(&self, game_id: i32) -> Result<Vec<entity::game_mode::Model>, DbErr> {
        entity::prelude::GameMode::find()
            .filter(entity::game_mode::Column::GameId.eq(game_id))
            .all(self.db)
            .await
    }

    /// Mode rows of several games keyed by game id.
    pub async fn find_modes_for(
        &self,
        game_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::game_mode::Model>>, DbErr> {
        let mut modes: HashMap<i32, Vec<entity::game_mode::Model>> = HashMap::new();

        if game_ids.is_empty() {
            return Ok(modes);
        }

        let rows = entity::prelude::GameMode::find()
            .filter(entity::game_mode::Column::GameId.is_in(game_ids.iter().copied()))
            .all(self.db)
            .await?;

        for row in rows {
            modes.entry(row.game_id).or_default().push(row);
        }

        Ok(modes)
    }

    /// Replaces scalar fields when the stored version equals `params.version`.
    ///
    /// Compare-and-swap on the version column: the row only changes when nobody else
    /// updated it since `params.version` was read.
    ///
    /// # Returns
    /// - `Ok(1)` - Updated, version incremented by one
    /// - `Ok(0)` - No game with that id and version, or a version that cannot be incremented
    pub async fn update_versioned(
        &self,
        params: &UpdateGameParams,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        // No stored row can hold a version past i32::MAX
        let Some(next_version) = params.version.checked_add(1) else {
            return Ok(0);
        };

        let result = entity::prelude::Game::update_many()
            .set(entity::game::ActiveModel {
                title: ActiveValue::Set(params.title.clone()),
                description: ActiveValue::Set(params.description.clone()),
                age_rating: ActiveValue::Set(Some(AgeRating::encode_optional(params.age_rating))),
                franchise_id: ActiveValue::Set(params.franchise_id),
                updated_at: ActiveValue::Set(now),
                version: ActiveValue::Set(next_version),
                ..Default::default()
            })
            .filter(entity::game::Column::Id.eq(params.id))
            .filter(entity::game::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Bumps version and `updated_at` without changing fields, with the same compare-and-swap
    /// as `update_versioned`.
    pub async fn touch(&self, id: i32, version: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let Some(next_version) = version.checked_add(1) else {
            return Ok(0);
        };

        let result = entity::prelude::Game::update_many()
            .col_expr(entity::game::Column::Version, Expr::value(next_version))
            .col_expr(entity::game::Column::UpdatedAt, Expr::value(now))
            .filter(entity::game::Column::Id.eq(id))
            .filter(entity::game::Column::Version.eq(version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the mode set of a game.
    pub async fn replace_modes(
        &self,
        game_id: i32,
        modes: &BTreeSet<GameMode>,
    ) -> Result<(), DbErr> {
        entity::prelude::GameMode::delete_many()
            .filter(entity::game_mode::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        self.insert_modes(game_id, modes).await
    }

    /// Clears the franchise of every game in it.
    pub async fn clear_franchise(&self, franchise_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::update_many()
            .col_expr(
                entity::game::Column::FranchiseId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::game::Column::FranchiseId.eq(franchise_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a game row. Join rows and owned children must be removed first.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every mode row of a game.
    pub async fn delete_modes(&self, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameMode::delete_many()
            .filter(entity::game_mode::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn insert_modes(&self, game_id: i32, modes: &BTreeSet<GameMode>) -> Result<(), DbErr> {
        if modes.is_empty() {
            return Ok(());
        }

        entity::prelude::GameMode::insert_many(modes.iter().map(|mode| {
            entity::game_mode::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                mode: ActiveValue::Set(mode.as_str().to_string()),
            }
        }))
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}

/// Game query restricted by every set criterion of `filter`.
///
/// Association criteria become `id IN (SELECT game_id FROM <join> WHERE <target> = ?)`
/// subqueries so each criterion matches independently of the others.
fn filtered(filter: &GameFilter) -> Select<entity::game::Entity> {
    let mut condition = Condition::all();

    for (kind, target_id) in filter.associations() {
        let subquery = with_link!(kind, link => {
            Query::select()
                .column(link::Column::GameId)
                .from(link::Entity)
                .and_where(link::TARGET.eq(target_id))
                .to_owned()
        });

        condition = condition.add(entity::game::Column::Id.in_subquery(subquery));
    }

    if let Some(franchise_id) = filter.franchise_id {
        condition = condition.add(entity::game::Column::FranchiseId.eq(franchise_id));
    }

    entity::prelude::Game::find().filter(condition)
}
