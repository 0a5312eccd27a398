//! Extractors shared by the controllers.

pub mod path;
pub mod payload;
