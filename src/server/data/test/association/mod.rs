use crate::server::{data::association::AssociationRepository, model::association::AssociationKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
