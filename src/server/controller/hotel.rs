use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{CreateHotelDetailsDto, HotelDetailsDto, UpdateHotelDetailsDto},
    },
    server::{
        controller::{
            booking::BOOKING_TAG,
            util::{path::Path, payload::Payload},
        },
        error::Error,
        model::app::AppState,
        service::hotel::HotelDetailsService,
    },
};

/// Attach hotel details to a booking
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/hotel-details",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = CreateHotelDetailsDto,
    responses(
        (status = 201, description = "Hotel details created", body = HotelDetailsDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already has hotel details", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel_details(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<CreateHotelDetailsDto>,
) -> Result<impl IntoResponse, Error> {
    let hotel_details = HotelDetailsService::new(&state.db)
        .create(booking_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(HotelDetailsDto::from(hotel_details))))
}

/// Get the hotel details of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/hotel-details",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Hotel details found", body = HotelDetailsDto),
        (status = 404, description = "Booking or hotel details not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_details(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let hotel_details = HotelDetailsService::new(&state.db).get(booking_id).await?;

    Ok((StatusCode::OK, Json(HotelDetailsDto::from(hotel_details))))
}

/// Update the hotel details of a booking
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{booking_id}/hotel-details",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = UpdateHotelDetailsDto,
    responses(
        (status = 200, description = "Hotel details updated", body = HotelDetailsDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking or hotel details not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel_details(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<UpdateHotelDetailsDto>,
) -> Result<impl IntoResponse, Error> {
    let hotel_details = HotelDetailsService::new(&state.db)
        .update(booking_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(HotelDetailsDto::from(hotel_details))))
}
