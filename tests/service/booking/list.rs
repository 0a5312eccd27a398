//! Tests for BookingService::list.

use std::collections::HashMap;

use entity::sea_orm_active_enums::BookingStatus;

use super::*;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Expect the status filter and limit to narrow the page
#[tokio::test]
async fn filters_by_status_with_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "list").await?;
    for i in 0..7 {
        test.booking()
            .insert_booking_with_status(
                traveler_id,
                tour_id,
                &format!("BK-L{i}"),
                BookingStatus::Confirmed,
            )
            .await?;
    }
    test.booking()
        .insert_booking(traveler_id, tour_id, "BK-PENDING")
        .await?;

    let bookings = BookingService::new(&test.db)
        .list(&params(&[("status", "confirmed"), ("limit", "5")]))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 5);
    assert!(bookings
        .iter()
        .all(|b| b.booking.status == BookingStatus::Confirmed));

    Ok(())
}

/// Expect summaries to carry the traveler, tour, guide and participants
#[tokio::test]
async fn loads_relations_for_each_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-REL").await?;
    test.booking().insert_participant(booking.id, "Ana").await?;
    test.booking().insert_participant(booking.id, "Ben").await?;

    let bookings = BookingService::new(&test.db)
        .list(&params(&[("tour_id", booking.tour_id.to_string().as_str())]))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    let summary = &bookings[0];
    assert_eq!(
        summary.traveler.as_ref().map(|t| t.id),
        Some(booking.traveler_id)
    );
    assert_eq!(summary.tour.as_ref().map(|t| t.id), Some(booking.tour_id));
    assert_eq!(summary.guide.as_ref().map(|g| g.id), Some(booking.guide_id));
    assert_eq!(summary.participants.len(), 2);
    assert!(summary.pricing.is_none());

    Ok(())
}

/// Expect an unparseable filter value to match nothing and bad pagination to use defaults
#[tokio::test]
async fn tolerates_unparseable_values() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    test.booking().insert_with_parents("BK-T1").await?;
    let service = BookingService::new(&test.db);

    let unknown_status = service
        .list(&params(&[("status", "lost")]))
        .await
        .unwrap();
    assert!(unknown_status.is_empty());

    let bad_pagination = service
        .list(&params(&[("page", "zero"), ("limit", "-3"), ("colour", "blue")]))
        .await
        .unwrap();
    assert_eq!(bad_pagination.len(), 1);

    Ok(())
}

/// Expect a page far past the end to be empty rather than an error
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    test.booking().insert_with_parents("BK-FAR").await?;

    let bookings = BookingService::new(&test.db)
        .list(&params(&[("page", "9223372036854775807")]))
        .await
        .unwrap();

    assert!(bookings.is_empty());

    Ok(())
}
