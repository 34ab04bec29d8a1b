//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! catalog entities and operation parameters. Domain models are converted from entity
//! models after the repository call and transformed to DTOs at the controller boundary.
//! Parameter types carry the `validate()` rules for write operations.

pub mod association;
pub mod barcode;
pub mod catalog;
pub mod code;
pub mod downloadable_content;
pub mod filter;
pub mod franchise;
pub mod game;
pub mod page;
pub mod patch;
pub mod release_date;
