//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into parameters, call a service
//! and convert the returned domain model back into a DTO. Reads are public; writes need the
//! moderator role and deletes the admin role.

pub mod barcode;
pub mod catalog;
pub mod downloadable_content;
pub mod franchise;
pub mod game;
pub mod game_association;
pub mod param;
pub mod release_date;
