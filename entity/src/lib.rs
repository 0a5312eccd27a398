pub mod prelude;

pub mod booking;
pub mod booking_hotel_details;
pub mod booking_participant;
pub mod booking_preference;
pub mod booking_pricing;
pub mod payment;
pub mod review;
pub mod review_detailed_ratings;
pub mod review_image;
pub mod sea_orm_active_enums;
pub mod tour;
pub mod tour_category;
pub mod tour_destination;
pub mod tour_exclude;
pub mod tour_image;
pub mod tour_include;
pub mod tour_itinerary;
pub mod tour_itinerary_activity;
pub mod tour_itinerary_meal;
pub mod tour_tag;
pub mod user;
