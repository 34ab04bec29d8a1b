use crate::{
    model::game::{AgeRating, GameMode},
    server::{
        data::game::GameRepository,
        model::{
            association::AssociationKind,
            filter::GameFilter,
            game::{CreateGameParams, UpdateGameParams},
            page::{PageRequest, SortDirection, SortField, SortOrder},
        },
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_page;
mod update_versioned;
