pub mod booking;
pub mod hotel;
pub mod participant;
pub mod payment;
pub mod preference;
pub mod pricing;
