//! Request and response models shared by the HTTP API.
//!
//! DTOs in this module are serialized as JSON and documented for OpenAPI through `utoipa`.
//! Response DTOs are built from database models with `From` conversions, request DTOs are
//! deserialized by the controller payload extractor.

pub mod api;
pub mod booking;
pub mod payment;
pub mod review;
pub mod tour;
pub mod user;
