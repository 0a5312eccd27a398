//! Service layer for business logic.
//!
//! Services validate payloads, resolve references and coordinate repositories. The booking
//! service owns the aggregate lifecycle; the sub-record services attach participants, pricing,
//! hotel details, preferences and payments to a live booking. Tours, reviews and users have
//! their own services.

pub mod booking;
pub mod hotel;
pub mod participant;
pub mod payment;
pub mod preference;
pub mod pricing;
pub mod reference;
pub mod review;
pub mod tour;
pub mod user;
