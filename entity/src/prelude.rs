pub use super::booking::Entity as Booking;
pub use super::booking_hotel_details::Entity as BookingHotelDetails;
pub use super::booking_participant::Entity as BookingParticipant;
pub use super::booking_preference::Entity as BookingPreference;
pub use super::booking_pricing::Entity as BookingPricing;
pub use super::payment::Entity as Payment;
pub use super::review::Entity as Review;
pub use super::review_detailed_ratings::Entity as ReviewDetailedRatings;
pub use super::review_image::Entity as ReviewImage;
pub use super::tour::Entity as Tour;
pub use super::tour_category::Entity as TourCategory;
pub use super::tour_destination::Entity as TourDestination;
pub use super::tour_exclude::Entity as TourExclude;
pub use super::tour_image::Entity as TourImage;
pub use super::tour_include::Entity as TourInclude;
pub use super::tour_itinerary::Entity as TourItinerary;
pub use super::tour_itinerary_activity::Entity as TourItineraryActivity;
pub use super::tour_itinerary_meal::Entity as TourItineraryMeal;
pub use super::tour_tag::Entity as TourTag;
pub use super::user::Entity as User;
