//! Data transfer objects shared by the REST API.
//!
//! Every type here is serialized to or from JSON at the controller boundary and documented
//! through `utoipa::ToSchema`. Domain logic lives in `crate::server::model`; conversion
//! happens through `from_dto`/`into_dto` on the server side.

pub mod api;
pub mod barcode;
pub mod catalog;
pub mod franchise;
pub mod game;
pub mod link;
