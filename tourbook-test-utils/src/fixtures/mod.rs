//! Database fixtures for users, tours and bookings.
//!
//! Fixtures insert rows with standard test values. Parent rows a fixture needs but the
//! caller doesn't provide, such as a tour's category, are created automatically with
//! unique names.

use std::sync::atomic::{AtomicUsize, Ordering};

pub mod booking;
pub mod tour;
pub mod user;

static FIXTURE_SEQUENCE: AtomicUsize = AtomicUsize::new(1);

/// Next value of a process-wide counter, used to keep unique columns distinct across
/// fixtures.
pub(crate) fn next_sequence() -> usize {
    FIXTURE_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}
