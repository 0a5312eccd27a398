//! Tests for BookingService::confirm and BookingService::complete.

use entity::sea_orm_active_enums::BookingStatus;
use tourbook::server::error::{lifecycle::LifecycleError, Error};

use super::*;

/// Expect pending to move to confirmed and then to completed
#[tokio::test]
async fn confirms_then_completes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-S1").await?;
    let service = BookingService::new(&test.db);

    let confirmed = service.confirm(booking.id).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let completed = service.complete(booking.id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    Ok(())
}

/// Expect confirming twice to leave the booking confirmed
#[tokio::test]
async fn confirming_twice_is_a_no_op() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-S2").await?;
    let service = BookingService::new(&test.db);

    let first = service.confirm(booking.id).await.unwrap();
    let second = service.confirm(booking.id).await.unwrap();

    assert_eq!(second.status, BookingStatus::Confirmed);
    assert_eq!(second.updated_at, first.updated_at);

    Ok(())
}

/// Expect a pending booking to refuse completion
#[tokio::test]
async fn refuses_to_complete_pending_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-S3").await?;

    let result = BookingService::new(&test.db).complete(booking.id).await;

    assert!(matches!(
        result,
        Err(Error::Lifecycle(LifecycleError::InvalidTransition {
            from: BookingStatus::Pending,
            to: BookingStatus::Completed,
        }))
    ));

    Ok(())
}

/// Expect a cancelled booking to refuse confirmation
#[tokio::test]
async fn refuses_to_confirm_cancelled_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-S4").await?;
    let service = BookingService::new(&test.db);
    service
        .cancel(booking.id, Default::default())
        .await
        .unwrap();

    let result = service.confirm(booking.id).await;

    assert!(matches!(result, Err(Error::Lifecycle(_))));

    Ok(())
}
