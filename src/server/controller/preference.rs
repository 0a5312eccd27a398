use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{CreatePreferenceDto, PreferenceDto},
    },
    server::{
        controller::{
            booking::BOOKING_TAG,
            util::{path::Path, payload::Payload},
        },
        error::Error,
        model::app::AppState,
        service::preference::PreferenceService,
    },
};

/// Record a traveler preference on a booking
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/preferences",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = CreatePreferenceDto,
    responses(
        (status = 201, description = "Preference recorded", body = PreferenceDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_preference(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<CreatePreferenceDto>,
) -> Result<impl IntoResponse, Error> {
    let preference = PreferenceService::new(&state.db)
        .add(booking_id, payload.preference)
        .await?;

    Ok((StatusCode::CREATED, Json(PreferenceDto::from(preference))))
}

/// List the preferences of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/preferences",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Preferences of the booking", body = Vec<PreferenceDto>),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_preferences(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let preferences: Vec<PreferenceDto> = PreferenceService::new(&state.db)
        .list(booking_id)
        .await?
        .into_iter()
        .map(PreferenceDto::from)
        .collect();

    Ok((StatusCode::OK, Json(preferences)))
}
