use crate::server::{
    data::catalog::CatalogRepository,
    model::{
        association::AssociationKind,
        catalog::{CreateCatalogEntryParams, UpdateCatalogEntryParams},
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod existing_ids;
mod update_versioned;
