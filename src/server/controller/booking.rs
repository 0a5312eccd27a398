use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingDetailDto, BookingDto, BookingSummaryDto, CancelBookingDto,
            CreateBookingAggregateDto, CreateBookingDto, UpdateBookingDto,
        },
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error, model::app::AppState,
        service::booking::BookingService,
    },
};

pub static BOOKING_TAG: &str = "booking";

/// Create a booking
///
/// Tour, traveler and guide must resolve to live records. Traveler and tour details default
/// from those records and a `BK-` reference is generated when none is given.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created with status pending", body = BookingDto),
        (status = 400, description = "Malformed payload or unresolved reference", body = ErrorDto),
        (status = 409, description = "Booking reference already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateBookingDto>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(BookingDto::from(booking))))
}

/// Create a booking together with its participants, pricing, hotel details and preferences
///
/// Nothing is written unless every part of the aggregate is stored.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/aggregate",
    tag = BOOKING_TAG,
    request_body = CreateBookingAggregateDto,
    responses(
        (status = 201, description = "Booking and sub-records created", body = BookingDetailDto),
        (status = 400, description = "Malformed payload or unresolved reference", body = ErrorDto),
        (status = 409, description = "Booking reference already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking_aggregate(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateBookingAggregateDto>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db)
        .create_with_details(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List bookings
///
/// Accepts `page`, `limit`, `status`, `traveler_id` and `tour_id`. Unknown keys are ignored.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("status" = Option<String>, Query, description = "Booking status"),
        ("traveler_id" = Option<i32>, Query, description = "Traveler id"),
        ("tour_id" = Option<i32>, Query, description = "Tour id")
    ),
    responses(
        (status = 200, description = "A page of bookings, newest first", body = Vec<BookingSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Error> {
    let bookings = BookingService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Get a booking with every related record
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking found", body = BookingDetailDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Get a booking by its reference
#[utoipa::path(
    get,
    path = "/api/v1/bookings/reference/{reference}",
    tag = BOOKING_TAG,
    params(("reference" = String, Path, description = "Booking reference")),
    responses(
        (status = 200, description = "Booking found", body = BookingDetailDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db)
        .get_by_reference(&reference)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Update descriptive booking fields
///
/// Status changes go through the confirm, complete and cancel routes.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<UpdateBookingDto>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

/// Soft-delete a booking
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    BookingService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking deleted successfully".to_string(),
        }),
    ))
}

/// Confirm a pending booking
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/confirm",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking confirmed", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be confirmed from its current status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).confirm(id).await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

/// Complete a confirmed booking
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/complete",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking completed", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be completed from its current status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).complete(id).await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

/// Cancel a pending or confirmed booking
///
/// Records the reason and refund amount with a pending refund. Cancelling an already cancelled
/// booking returns it unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    request_body = CancelBookingDto,
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<CancelBookingDto>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db).cancel(id, payload).await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}
