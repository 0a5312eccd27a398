//! Tests for BookingService::update.

use tourbook::{
    model::{booking::UpdateBookingDto, tour::UpdateTourDto},
    server::{error::Error, service::tour::TourService},
};

use super::*;

/// Expect a resize past the tour maximum to be rejected, as it is at create time
#[tokio::test]
async fn rejects_resize_past_tour_maximum() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "resize").await?;
    TourService::new(&test.db)
        .update(
            tour_id,
            UpdateTourDto {
                max_participants: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let service = BookingService::new(&test.db);

    let mut oversized = booking_payload(traveler_id, tour_id, None);
    oversized.total_participants = 50;
    assert!(matches!(
        service.create(oversized).await,
        Err(Error::MalformedInput(_))
    ));

    let booking = service
        .create(booking_payload(traveler_id, tour_id, Some("BK-RS1")))
        .await
        .unwrap();
    let result = service
        .update(
            booking.id,
            UpdateBookingDto {
                total_participants: Some(50),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(Error::MalformedInput(_))));

    let resized = service
        .update(
            booking.id,
            UpdateBookingDto {
                total_participants: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(resized.total_participants, 4);

    Ok(())
}

/// Expect descriptive edits to leave the participant counts alone
#[tokio::test]
async fn updates_descriptive_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "notes").await?;
    let service = BookingService::new(&test.db);
    let booking = service
        .create(booking_payload(traveler_id, tour_id, None))
        .await
        .unwrap();

    let updated = service
        .update(
            booking.id,
            UpdateBookingDto {
                notes: Some("Vegetarian lunch".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.notes.as_deref(), Some("Vegetarian lunch"));
    assert_eq!(updated.total_participants, 2);

    Ok(())
}
