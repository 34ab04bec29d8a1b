//! Database repository layer for all catalog entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! area of the catalog. Repositories use SeaORM entity models internally and are generic over
//! `ConnectionTrait`, so services can run several of them inside one transaction. All
//! database queries, inserts, updates, and deletes are performed through these repositories.

pub mod association;
pub mod barcode;
pub mod catalog;
pub mod downloadable_content;
pub mod franchise;
pub mod game;
pub mod release_date;

#[cfg(test)]
mod test;
