use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::BTreeSet;

use crate::server::model::{
    association::AssociationKind,
    catalog::{CatalogEntry, CreateCatalogEntryParams, UpdateCatalogEntryParams},
};

/// Runs `$body` with `$catalog` bound to the entity module of `$kind`.
///
/// The four catalog modules expose identical columns, so one body serves all of them.
macro_rules! with_catalog {
    ($kind:expr, $catalog:ident => $body:expr) => {
        match $kind {
            AssociationKind::Genre => {
                use entity::genre as $catalog;
                $body
            }
            AssociationKind::Platform => {
                use entity::platform as $catalog;
                $body
            }
            AssociationKind::Publisher => {
                use entity::publisher as $catalog;
                $body
            }
            AssociationKind::Developer => {
                use entity::developer as $catalog;
                $body
            }
        }
    };
}

/// Builds a `CatalogEntry` from any catalog entity model.
macro_rules! entry {
    ($kind:expr, $model:expr) => {{
        let model = $model;
        CatalogEntry {
            kind: $kind,
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
            version: model.version,
        }
    }};
}

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a catalog entry of `kind` at version 0.
    pub async fn create(
        &self,
        kind: AssociationKind,
        params: CreateCatalogEntryParams,
        now: DateTime<Utc>,
    ) -> Result<CatalogEntry, DbErr> {
        with_catalog!(kind, catalog => {
            let model = catalog::ActiveModel {
                name: ActiveValue::Set(params.name),
                description: ActiveValue::Set(params.description),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                version: ActiveValue::Set(0),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            Ok(entry!(kind, model))
        })
    }

    pub async fn find_by_id(
        &self,
        kind: AssociationKind,
        id: i32,
    ) -> Result<Option<CatalogEntry>, DbErr> {
        with_catalog!(kind, catalog => {
            let model = catalog::Entity::find_by_id(id).one(self.db).await?;

            Ok(model.map(|model| entry!(kind, model)))
        })
    }

    pub async fn exists(&self, kind: AssociationKind, id: i32) -> Result<bool, DbErr> {
        with_catalog!(kind, catalog => {
            let count = catalog::Entity::find()
                .filter(catalog::Column::Id.eq(id))
                .count(self.db)
                .await?;

            Ok(count > 0)
        })
    }

    /// Subset of `ids` that resolve to an existing entry of `kind`.
    pub async fn existing_ids(
        &self,
        kind: AssociationKind,
        ids: &BTreeSet<i32>,
    ) -> Result<BTreeSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        with_catalog!(kind, catalog => {
            let models = catalog::Entity::find()
                .filter(catalog::Column::Id.is_in(ids.iter().copied()))
                .all(self.db)
                .await?;

            Ok(models.into_iter().map(|model| model.id).collect())
        })
    }

    /// Entries of `kind` with the given ids, ordered by name.
    pub async fn find_by_ids(
        &self,
        kind: AssociationKind,
        ids: &[i32],
    ) -> Result<Vec<CatalogEntry>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        with_catalog!(kind, catalog => {
            let models = catalog::Entity::find()
                .filter(catalog::Column::Id.is_in(ids.iter().copied()))
                .order_by_asc(catalog::Column::Name)
                .all(self.db)
                .await?;

            Ok(models.into_iter().map(|model| entry!(kind, model)).collect())
        })
    }

    /// Gets a page of entries of `kind` ordered by name, with the total count.
    pub async fn get_paginated(
        &self,
        kind: AssociationKind,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CatalogEntry>, u64), DbErr> {
        with_catalog!(kind, catalog => {
            let paginator = catalog::Entity::find()
                .order_by_asc(catalog::Column::Name)
                .order_by_asc(catalog::Column::Id)
                .paginate(self.db, per_page);

            let total = paginator.num_items().await?;
            let models = paginator.fetch_page(page).await?;

            Ok((
                models.into_iter().map(|model| entry!(kind, model)).collect(),
                total,
            ))
        })
    }

    /// Updates name and description when the stored version equals `params.version`.
    ///
    /// # Returns
    /// - `Ok(1)` - Updated, version incremented
    /// - `Ok(0)` - No entry with that id and version
    pub async fn update_versioned(
        &self,
        kind: AssociationKind,
        params: UpdateCatalogEntryParams,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let Some(next_version) = params.version.checked_add(1) else {
            return Ok(0);
        };

        with_catalog!(kind, catalog => {
            let result = catalog::Entity::update_many()
                .set(catalog::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    description: ActiveValue::Set(params.description),
                    updated_at: ActiveValue::Set(now),
                    version: ActiveValue::Set(next_version),
                    ..Default::default()
                })
                .filter(catalog::Column::Id.eq(params.id))
                .filter(catalog::Column::Version.eq(params.version))
                .exec(self.db)
                .await?;

            Ok(result.rows_affected)
        })
    }

    pub async fn delete(&self, kind: AssociationKind, id: i32) -> Result<u64, DbErr> {
        with_catalog!(kind, catalog => {
            let result = catalog::Entity::delete_by_id(id).exec(self.db).await?;

            Ok(result.rows_affected)
        })
    }
}
