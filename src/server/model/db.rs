//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so services and
//! repositories can refer to them without spelling out the `entity` crate path.

/// User account, either a traveler or a local expert running tours.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `role` - `traveler`, `local-expert` or `admin`
/// - `deleted_at` - Soft-delete marker, `None` while the account is live
pub type UserModel = entity::user::Model;

/// Tour offering published by a local expert.
pub type TourModel = entity::tour::Model;

/// Category a tour is listed under.
pub type TourCategoryModel = entity::tour_category::Model;

/// Destination a tour takes place in.
pub type TourDestinationModel = entity::tour_destination::Model;

/// Root of the booking aggregate.
///
/// # Fields (from `entity::booking::Model`)
/// - `id` - Primary key
/// - `booking_reference` - Unique business identifier, distinct from `id`
/// - `status` - Position in the `pending → confirmed → completed` lifecycle, or `cancelled`
/// - `traveler_id`, `tour_id`, `guide_id` - References validated when the booking is created
/// - `is_cancelled`, `cancelled_at`, `cancellation_reason`, `refund_amount`, `refund_status` -
///   Cancellation metadata, only written by the cancel operation
/// - `deleted_at` - Soft-delete marker, `None` while the booking is live
pub type BookingModel = entity::booking::Model;

/// Traveler detail attached to a booking.
pub type ParticipantModel = entity::booking_participant::Model;

/// Itemised cost breakdown, at most one per booking.
pub type PricingModel = entity::booking_pricing::Model;

/// Accommodation details, at most one per booking.
pub type HotelDetailsModel = entity::booking_hotel_details::Model;

/// Free-form preference attached to a booking.
pub type PreferenceModel = entity::booking_preference::Model;

/// Settlement attempt recorded against a booking.
pub type PaymentModel = entity::payment::Model;

/// Rating and comment for a tour, optionally linked to the originating booking.
pub type ReviewModel = entity::review::Model;

/// Per-aspect scores attached to a review.
pub type DetailedRatingsModel = entity::review_detailed_ratings::Model;

/// Image attached to a review.
pub type ReviewImageModel = entity::review_image::Model;
