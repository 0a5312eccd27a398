use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{CreatePricingDto, PricingDto, UpdatePricingDto},
    },
    server::{
        controller::{
            booking::BOOKING_TAG,
            util::{path::Path, payload::Payload},
        },
        error::Error,
        model::app::AppState,
        service::pricing::PricingService,
    },
};

/// Attach the pricing breakdown to a booking
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/pricing",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = CreatePricingDto,
    responses(
        (status = 201, description = "Pricing created", body = PricingDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already has pricing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pricing(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<CreatePricingDto>,
) -> Result<impl IntoResponse, Error> {
    let pricing = PricingService::new(&state.db)
        .create(booking_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(PricingDto::from(pricing))))
}

/// Get the pricing breakdown of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/pricing",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Pricing found", body = PricingDto),
        (status = 404, description = "Booking or pricing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pricing(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pricing = PricingService::new(&state.db).get(booking_id).await?;

    Ok((StatusCode::OK, Json(PricingDto::from(pricing))))
}

/// Update the pricing breakdown of a booking
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{booking_id}/pricing",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = UpdatePricingDto,
    responses(
        (status = 200, description = "Pricing updated", body = PricingDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking or pricing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pricing(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<UpdatePricingDto>,
) -> Result<impl IntoResponse, Error> {
    let pricing = PricingService::new(&state.db)
        .update(booking_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(PricingDto::from(pricing))))
}
