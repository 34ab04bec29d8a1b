//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls within one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Localized Errors**: Rendering not-found and conflict messages in the request locale

pub mod barcode;
pub mod catalog;
pub mod downloadable_content;
pub mod franchise;
pub mod game;
pub mod release_date;

#[cfg(test)]
mod test;
