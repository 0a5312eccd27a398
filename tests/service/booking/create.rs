//! Tests for BookingService::create.

use entity::sea_orm_active_enums::{BookingStatus, UserRole};
use sea_orm::{EntityTrait, PaginatorTrait};
use tourbook::server::{
    error::{resource::ReferenceKind, resource::Resource, Error},
    util::reference::BOOKING_REFERENCE_PREFIX,
};

use super::*;

/// Expect a pending booking with traveler and tour details copied from the references
#[tokio::test]
async fn creates_pending_booking_with_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "defaults").await?;

    let booking = BookingService::new(&test.db)
        .create(booking_payload(traveler_id, tour_id, Some("BK001")))
        .await
        .unwrap();

    assert_eq!(booking.booking_reference, "BK001");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.traveler_email, "traveler-defaults@example.com");
    assert_eq!(booking.traveler_name, "Test User");
    assert_eq!(booking.adult_count, 2);
    assert_eq!(booking.child_count, 0);
    assert_eq!(booking.currency, "USD");
    assert!(!booking.is_cancelled);
    assert!(booking.refund_status.is_none());

    Ok(())
}

/// Expect a `BK-` reference of eight uppercase letters or digits when none is supplied
#[tokio::test]
async fn generates_reference_when_omitted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "generated").await?;

    let booking = BookingService::new(&test.db)
        .create(booking_payload(traveler_id, tour_id, None))
        .await
        .unwrap();

    let suffix = booking
        .booking_reference
        .strip_prefix(BOOKING_REFERENCE_PREFIX)
        .unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    Ok(())
}

/// Expect ReferenceNotFound(Tour) and no booking row for an unknown tour
#[tokio::test]
async fn rejects_unknown_tour_without_writing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, _) = parents(&test, "unknown-tour").await?;

    let result = BookingService::new(&test.db)
        .create(booking_payload(traveler_id, 9999, Some("BK404")))
        .await;

    assert!(matches!(
        result,
        Err(Error::ReferenceNotFound(ReferenceKind::Tour))
    ));
    let count = entity::prelude::Booking::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Expect ReferenceNotFound(Traveler) for an unknown traveler
#[tokio::test]
async fn rejects_unknown_traveler() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (_, tour_id) = parents(&test, "unknown-traveler").await?;

    let result = BookingService::new(&test.db)
        .create(booking_payload(9999, tour_id, None))
        .await;

    assert!(matches!(
        result,
        Err(Error::ReferenceNotFound(ReferenceKind::Traveler))
    ));

    Ok(())
}

/// Expect a guide who does not lead the tour to be rejected
#[tokio::test]
async fn rejects_guide_not_leading_tour() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "other-guide").await?;
    let other_guide = test
        .user()
        .insert_user("someone-else@example.com", UserRole::LocalExpert)
        .await?;

    let mut payload = booking_payload(traveler_id, tour_id, None);
    payload.guide_id = Some(other_guide.id);
    let result = BookingService::new(&test.db).create(payload).await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));

    Ok(())
}

/// Expect AlreadyExists(Booking) when the reference is taken
#[tokio::test]
async fn rejects_duplicate_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "duplicate").await?;
    let service = BookingService::new(&test.db);

    service
        .create(booking_payload(traveler_id, tour_id, Some("BK001")))
        .await
        .unwrap();
    let result = service
        .create(booking_payload(traveler_id, tour_id, Some("BK001")))
        .await;

    assert!(matches!(
        result,
        Err(Error::AlreadyExists(Resource::Booking))
    ));

    Ok(())
}

/// Expect MalformedInput when the end date precedes the start date
#[tokio::test]
async fn rejects_inverted_dates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "dates").await?;

    let mut payload = booking_payload(traveler_id, tour_id, None);
    payload.start_date = crate::util::date(2024, 6, 2);
    let result = BookingService::new(&test.db).create(payload).await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));

    Ok(())
}

/// Expect participant counts that overflow an i32 to be rejected without writing
#[tokio::test]
async fn rejects_overflowing_participant_counts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "overflow").await?;
    let service = BookingService::new(&test.db);

    let mut payload = booking_payload(traveler_id, tour_id, None);
    payload.total_participants = 1;
    payload.adult_count = Some(i32::MAX);
    payload.child_count = Some(1);
    let result = service.create(payload).await;
    assert!(matches!(result, Err(Error::MalformedInput(_))));

    let mut payload = booking_payload(traveler_id, tour_id, None);
    payload.total_participants = 1;
    payload.child_count = Some(i32::MIN);
    let result = service.create(payload).await;
    assert!(matches!(result, Err(Error::MalformedInput(_))));

    let count = entity::prelude::Booking::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}
