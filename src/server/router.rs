//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// All endpoints live under `/api/v1`. Handlers sharing a path are registered together so
/// utoipa-axum can merge them into one method router.
///
/// # Registered Endpoints
/// - `/api/v1/bookings` - Create and list bookings, create a booking aggregate
/// - `/api/v1/bookings/{id}` - Read, update, delete, confirm, complete and cancel a booking
/// - `/api/v1/bookings/{booking_id}/...` - Participants, pricing, hotel details, preferences
///   and payments of a booking
/// - `/api/v1/reviews` - Tour reviews
/// - `/api/v1/tours` - Tour offerings
/// - `/api/v1/users` - Travelers, local experts and admins
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tourbook", description = "Tour-booking marketplace API"), tags(
        (name = controller::booking::BOOKING_TAG, description = "Bookings and their sub-records"),
        (name = controller::payment::PAYMENT_TAG, description = "Payments recorded against bookings"),
        (name = controller::review::REVIEW_TAG, description = "Tour reviews"),
        (name = controller::tour::TOUR_TAG, description = "Tour offerings"),
        (name = controller::user::USER_TAG, description = "Travelers, local experts and admins"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::booking::create_booking,
            controller::booking::list_bookings
        ))
        .routes(routes!(controller::booking::create_booking_aggregate))
        .routes(routes!(
            controller::booking::get_booking,
            controller::booking::update_booking,
            controller::booking::delete_booking
        ))
        .routes(routes!(controller::booking::get_booking_by_reference))
        .routes(routes!(controller::booking::confirm_booking))
        .routes(routes!(controller::booking::complete_booking))
        .routes(routes!(controller::booking::cancel_booking))
        .routes(routes!(
            controller::participant::add_participant,
            controller::participant::list_participants
        ))
        .routes(routes!(controller::participant::remove_participant))
        .routes(routes!(
            controller::pricing::create_pricing,
            controller::pricing::get_pricing,
            controller::pricing::update_pricing
        ))
        .routes(routes!(
            controller::hotel::create_hotel_details,
            controller::hotel::get_hotel_details,
            controller::hotel::update_hotel_details
        ))
        .routes(routes!(
            controller::preference::add_preference,
            controller::preference::list_preferences
        ))
        .routes(routes!(
            controller::payment::create_payment,
            controller::payment::list_payments
        ))
        .routes(routes!(controller::payment::get_payment))
        .routes(routes!(controller::payment::update_payment_status))
        .routes(routes!(
            controller::review::create_review,
            controller::review::list_reviews
        ))
        .routes(routes!(
            controller::review::get_review,
            controller::review::update_review,
            controller::review::delete_review
        ))
        .routes(routes!(
            controller::tour::create_tour,
            controller::tour::list_tours
        ))
        .routes(routes!(
            controller::tour::get_tour,
            controller::tour::update_tour,
            controller::tour::delete_tour
        ))
        .routes(routes!(
            controller::user::create_user,
            controller::user::list_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
