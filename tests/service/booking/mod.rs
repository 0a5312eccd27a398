//! Tests for the booking aggregate lifecycle.

mod aggregate;
mod cancel;
mod create;
mod delete;
mod list;
mod status;
mod update;

use tourbook::server::service::booking::BookingService;
use tourbook_test_utils::prelude::*;

use crate::util::booking_payload;

/// Creates a traveler, a guide and a tour, returning the ids of the traveler and the tour
async fn parents(test: &TestContext, sequence: &str) -> Result<(i32, i32), TestError> {
    let traveler = test
        .user()
        .insert_traveler(&format!("traveler-{sequence}@example.com"))
        .await?;
    let guide = test
        .user()
        .insert_guide(&format!("guide-{sequence}@example.com"))
        .await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    Ok((traveler.id, tour.id))
}
