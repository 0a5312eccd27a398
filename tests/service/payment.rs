//! Tests for PaymentService.

use entity::sea_orm_active_enums::PaymentStatus;
use tourbook::{
    model::payment::CreatePaymentDto,
    server::{
        error::{resource::Resource, Error},
        service::payment::PaymentService,
    },
};
use tourbook_test_utils::prelude::*;

fn card_payment(transaction_id: Option<&str>, amount: f64) -> CreatePaymentDto {
    CreatePaymentDto {
        payment_method: "card".to_string(),
        status: None,
        transaction_id: transaction_id.map(str::to_string),
        amount,
        currency: None,
    }
}

/// Expect a new payment to default to pending in USD without a paid date
#[tokio::test]
async fn records_pending_payment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PAY1").await?;

    let payment = PaymentService::new(&test.db)
        .create(booking.id, card_payment(Some("txn-1"), 200.0))
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.currency, "USD");
    assert!(payment.paid_at.is_none());

    Ok(())
}

/// Expect a reused transaction id to conflict
#[tokio::test]
async fn rejects_duplicate_transaction() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PAY2").await?;
    let service = PaymentService::new(&test.db);

    service
        .create(booking.id, card_payment(Some("txn-2"), 100.0))
        .await
        .unwrap();
    let result = service
        .create(booking.id, card_payment(Some("txn-2"), 100.0))
        .await;

    assert!(matches!(result, Err(Error::AlreadyExists(Resource::Payment))));

    Ok(())
}

/// Expect the paid date to be stamped once and kept through a refund
#[tokio::test]
async fn stamps_paid_at_on_first_completion() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PAY3").await?;
    let service = PaymentService::new(&test.db);
    let payment = service
        .create(booking.id, card_payment(None, 200.0))
        .await
        .unwrap();

    let completed = service
        .update_status(booking.id, payment.id, PaymentStatus::Completed)
        .await
        .unwrap();
    assert!(completed.paid_at.is_some());

    let refunded = service
        .update_status(booking.id, payment.id, PaymentStatus::Refunded)
        .await
        .unwrap();
    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.paid_at, completed.paid_at);

    Ok(())
}

/// Expect a payment to be reachable only through its own booking
#[tokio::test]
async fn scopes_payment_to_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PAY4").await?;
    let other = test.booking().insert_with_parents("BK-PAY5").await?;
    let service = PaymentService::new(&test.db);
    let payment = service
        .create(booking.id, card_payment(None, 50.0))
        .await
        .unwrap();

    let result = service.get(other.id, payment.id).await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Payment))));
    assert_eq!(service.list(booking.id).await.unwrap().len(), 1);
    assert!(service.list(other.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect an empty payment method or a negative amount to be rejected
#[tokio::test]
async fn rejects_invalid_payment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PAY6").await?;
    let service = PaymentService::new(&test.db);

    let negative = service
        .create(booking.id, card_payment(None, -10.0))
        .await;
    assert!(matches!(negative, Err(Error::MalformedInput(_))));

    let mut no_method = card_payment(None, 10.0);
    no_method.payment_method = " ".to_string();
    let result = service.create(booking.id, no_method).await;
    assert!(matches!(result, Err(Error::MalformedInput(_))));

    Ok(())
}
