//! Tour repositories.
//!
//! Tours own their images, itinerary days, tags, includes and excludes; these collections are
//! written alongside the tour and read back when a single tour is requested.

pub mod category;
pub mod content;
pub mod destination;
pub mod tour;
