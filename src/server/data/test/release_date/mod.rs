use crate::{
    model::game::GameRegion,
    server::{data::release_date::ReleaseDateRepository, model::release_date::NewReleaseDate},
};
use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod upsert;
