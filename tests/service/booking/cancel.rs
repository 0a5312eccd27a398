//! Tests for BookingService::cancel.

use entity::sea_orm_active_enums::{BookingStatus, RefundStatus};
use tourbook::{
    model::booking::CancelBookingDto,
    server::error::{lifecycle::LifecycleError, resource::Resource, Error},
};

use super::*;

fn cancellation(reason: &str, refund_amount: f64) -> CancelBookingDto {
    CancelBookingDto {
        reason: Some(reason.to_string()),
        refund_amount: Some(refund_amount),
    }
}

/// Expect a confirmed booking to be cancelled with a pending refund
#[tokio::test]
async fn cancels_confirmed_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-C1").await?;
    let service = BookingService::new(&test.db);
    service.confirm(booking.id).await.unwrap();

    let cancelled = service
        .cancel(booking.id, cancellation("weather", 50.0))
        .await
        .unwrap();

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.refund_amount, Some(50.0));
    assert_eq!(cancelled.refund_status, Some(RefundStatus::Pending));

    Ok(())
}

/// Expect a second cancellation to keep the details of the first
#[tokio::test]
async fn repeated_cancel_keeps_first_cancellation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-C2").await?;
    let service = BookingService::new(&test.db);

    let first = service
        .cancel(booking.id, cancellation("changed plans", 200.0))
        .await
        .unwrap();
    let second = service
        .cancel(booking.id, cancellation("something else", 10.0))
        .await
        .unwrap();

    assert_eq!(second.status, BookingStatus::Cancelled);
    assert_eq!(second.cancellation_reason.as_deref(), Some("changed plans"));
    assert_eq!(second.refund_amount, Some(200.0));
    assert_eq!(second.cancelled_at, first.cancelled_at);

    Ok(())
}

/// Expect a completed booking to refuse cancellation
#[tokio::test]
async fn refuses_to_cancel_completed_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-C3").await?;
    let service = BookingService::new(&test.db);
    service.confirm(booking.id).await.unwrap();
    service.complete(booking.id).await.unwrap();

    let result = service
        .cancel(booking.id, cancellation("too late", 0.0))
        .await;

    assert!(matches!(
        result,
        Err(Error::Lifecycle(LifecycleError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Expect a negative refund to be rejected before the booking is touched
#[tokio::test]
async fn rejects_negative_refund() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-C4").await?;
    let service = BookingService::new(&test.db);

    let result = service
        .cancel(booking.id, cancellation("oops", -1.0))
        .await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));
    let detail = service.get(booking.id).await.unwrap();
    assert_eq!(detail.booking.status, BookingStatus::Pending);

    Ok(())
}

/// Expect NotFound for a booking that does not exist
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let result = BookingService::new(&test.db)
        .cancel(42, CancelBookingDto::default())
        .await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Booking))));

    Ok(())
}
