use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentStatusDto},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error, model::app::AppState,
        service::payment::PaymentService,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Record a payment against a booking
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/payments",
    tag = PAYMENT_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Transaction id already recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Payload(payload): Payload<CreatePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let payment = PaymentService::new(&state.db)
        .create(booking_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

/// List the payments of a booking, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/payments",
    tag = PAYMENT_TAG,
    params(("booking_id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Payments of the booking", body = Vec<PaymentDto>),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let payments: Vec<PaymentDto> = PaymentService::new(&state.db)
        .list(booking_id)
        .await?
        .into_iter()
        .map(PaymentDto::from)
        .collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Get a single payment of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id"),
        ("id" = i32, Path, description = "Payment id")
    ),
    responses(
        (status = 200, description = "Payment found", body = PaymentDto),
        (status = 404, description = "Booking or payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path((booking_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let payment = PaymentService::new(&state.db).get(booking_id, id).await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}

/// Move a payment to a new status
///
/// `paid_at` is stamped the first time a payment is completed.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{booking_id}/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id"),
        ("id" = i32, Path, description = "Payment id")
    ),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Payment status updated", body = PaymentDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Booking or payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path((booking_id, id)): Path<(i32, i32)>,
    Payload(payload): Payload<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let payment = PaymentService::new(&state.db)
        .update_status(booking_id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}
