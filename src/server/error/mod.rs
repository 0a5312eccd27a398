//! Error types for the tour-booking server.
//!
//! This module provides the error handling system shared by every layer: repositories return
//! `sea_orm::DbErr`, services and controllers return [`Error`], and [`Error`] implements
//! `IntoResponse` so handlers can propagate failures with `?`. Each failure reaches the client
//! as a JSON [`ErrorDto`] with a human-readable message.

pub mod config;
pub mod lifecycle;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        lifecycle::LifecycleError,
        resource::{ReferenceKind, Resource},
    },
};

/// Main error type for the server application.
///
/// Aggregates the domain errors raised by the booking aggregate and its sub-records with the
/// external library errors of the storage and runtime layers. `thiserror`'s `#[from]` allows
/// conversion via the `?` operator.
///
/// # Error Categories
/// - Client input errors (malformed payloads, unresolved references)
/// - Lookup errors (missing or duplicate records)
/// - Booking lifecycle errors (invalid status transitions)
/// - Infrastructure errors (database, configuration, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Booking status operation not allowed from the booking's current status.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    /// Payload could not be parsed into the expected shape or failed validation.
    #[error("Invalid request: {0}")]
    MalformedInput(String),
    /// A foreign key in a create request does not resolve to a live record.
    #[error("{0} not found")]
    ReferenceNotFound(ReferenceKind),
    /// Lookup by id or business key found no live record.
    #[error("{0} not found")]
    NotFound(Resource),
    /// A record with the same unique key already exists.
    #[error("{0} already exists")]
    AlreadyExists(Resource),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    PersistenceFailure(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed input or an unresolved reference in a create request
/// - 404 Not Found - Missing record on a single-entity lookup
/// - 409 Conflict - Duplicate unique key or invalid status transition
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::Lifecycle(err) => err.into_response(),
            Self::MalformedInput(_) | Self::ReferenceNotFound(_) => {
                tracing::debug!("{}", self);

                client_error(StatusCode::BAD_REQUEST, &self)
            }
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                client_error(StatusCode::NOT_FOUND, &self)
            }
            Self::AlreadyExists(_) => {
                tracing::debug!("{}", self);

                client_error(StatusCode::CONFLICT, &self)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn client_error(status: StatusCode, err: &Error) -> Response {
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking storage engine details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
