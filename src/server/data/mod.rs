pub mod booking;
pub mod query;
pub mod review;
pub mod tour;
pub mod user;
