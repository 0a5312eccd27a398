//! HTTP controller endpoints for the tour-booking API.
//!
//! Axum handlers for bookings and their sub-records, tours, reviews and users. Handlers
//! extract path, query and body inputs, call the matching service and map the result to a
//! status code and JSON body. Request bodies go through [`util::payload::Payload`] so that a
//! malformed body is reported like any other invalid input. Every handler is documented with
//! utoipa for the OpenAPI document.

pub mod booking;
pub mod hotel;
pub mod participant;
pub mod payment;
pub mod preference;
pub mod pricing;
pub mod review;
pub mod tour;
pub mod user;
pub mod util;
