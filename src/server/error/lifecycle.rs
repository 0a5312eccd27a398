//! Booking lifecycle error types.
//!
//! Raised when a status operation is requested on a booking whose current status does not
//! allow it, such as confirming a cancelled booking or cancelling a completed one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::BookingStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Booking status state machine error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested status change is not an edge of the booking state machine.
    ///
    /// # Fields
    /// - `from` - The booking's current status
    /// - `to` - The status the operation would have moved it to
    #[error("Booking cannot transition from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

/// Converts lifecycle errors into 409 Conflict responses.
impl IntoResponse for LifecycleError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
