//! Tests for the service layer against an in-memory database.

mod booking;
mod payment;
mod review;
mod sub_record;
