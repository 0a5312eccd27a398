//! Booking status state machine.
//!
//! ```text
//! pending ──confirm──▶ confirmed ──complete──▶ completed
//!    │                     │
//!    └──────cancel─────────┴──────▶ cancelled
//! ```
//!
//! `completed` and `cancelled` are terminal. Requesting the status a booking already holds is
//! accepted and leaves the booking untouched, so retried requests are harmless.

use entity::sea_orm_active_enums::BookingStatus;

use crate::server::error::lifecycle::LifecycleError;

/// Status operations a client may request on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOperation {
    Confirm,
    Complete,
    Cancel,
}

impl StatusOperation {
    /// Status the booking holds once the operation has been applied.
    pub fn target(self) -> BookingStatus {
        match self {
            Self::Confirm => BookingStatus::Confirmed,
            Self::Complete => BookingStatus::Completed,
            Self::Cancel => BookingStatus::Cancelled,
        }
    }
}

/// Outcome of requesting a status operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move the booking to the given status and record the operation's side effects.
    Apply(BookingStatus),
    /// The booking already holds the target status; write nothing.
    Unchanged,
}

/// Decides how a booking in `current` status responds to `operation`.
pub fn transition(
    current: BookingStatus,
    operation: StatusOperation,
) -> Result<Transition, LifecycleError> {
    let target = operation.target();

    if current == target {
        return Ok(Transition::Unchanged);
    }

    let allowed = matches!(
        (current, operation),
        (BookingStatus::Pending, StatusOperation::Confirm)
            | (BookingStatus::Confirmed, StatusOperation::Complete)
            | (
                BookingStatus::Pending | BookingStatus::Confirmed,
                StatusOperation::Cancel
            )
    );

    if allowed {
        Ok(Transition::Apply(target))
    } else {
        Err(LifecycleError::InvalidTransition {
            from: current,
            to: target,
        })
    }
}
