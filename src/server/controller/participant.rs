use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{CreateParticipantDto, ParticipantDto},
    },
    server::{
        controller::{
            booking::BOOKING_TAG,
            util::{path::Path, payload::Payload},
        },
        error::Error,
        model::app::AppState,
        service::participant::ParticipantService,
    },
};

/// Add a participant to a booking
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/participants",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = CreateParticipantDto,
    responses(
        (status = 201, description = "Participant added", body = ParticipantDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_participant(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<CreateParticipantDto>,
) -> Result<impl IntoResponse, Error> {
    let participant = ParticipantService::new(&state.db)
        .add(booking_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(ParticipantDto::from(participant))))
}

/// List the participants of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/participants",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Participants of the booking", body = Vec<ParticipantDto>),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_participants(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let participants: Vec<ParticipantDto> = ParticipantService::new(&state.db)
        .list(booking_id)
        .await?
        .into_iter()
        .map(ParticipantDto::from)
        .collect();

    Ok((StatusCode::OK, Json(participants)))
}

/// Remove a participant from a booking
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{booking_id}/participants/{id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id"),
        ("id" = i32, Path, description = "Participant id")
    ),
    responses(
        (status = 200, description = "Participant removed", body = MessageDto),
        (status = 404, description = "Booking or participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((booking_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    ParticipantService::new(&state.db)
        .remove(booking_id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Participant removed successfully".to_string(),
        }),
    ))
}
