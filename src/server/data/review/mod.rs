pub mod attachment;
pub mod review;
