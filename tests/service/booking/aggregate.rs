//! Tests for creating a booking together with its sub-records.

use entity::sea_orm_active_enums::{BookingStatus, RefundStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use tourbook::{
    model::booking::{CancelBookingDto, CreateBookingAggregateDto, CreateHotelDetailsDto},
    server::{
        error::Error,
        service::{participant::ParticipantService, pricing::PricingService},
    },
};

use super::*;
use crate::util::{participant_payload, pricing_payload};

/// Expect a booking built step by step and then cancelled to keep its sub-records
///
/// Creates BK001 for two people, adds both participants and the pricing, then cancels it
/// with a full refund.
#[tokio::test]
async fn cancels_booking_built_step_by_step() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "scenario").await?;
    let service = BookingService::new(&test.db);

    let booking = service
        .create(booking_payload(traveler_id, tour_id, Some("BK001")))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    let participants = ParticipantService::new(&test.db);
    participants
        .add(booking.id, participant_payload("Ana", Some(30)))
        .await
        .unwrap();
    participants
        .add(booking.id, participant_payload("Ben", Some(28)))
        .await
        .unwrap();
    let pricing = PricingService::new(&test.db)
        .create(booking.id, pricing_payload())
        .await
        .unwrap();
    assert_eq!(pricing.total_price, 200.0);

    let cancelled = service
        .cancel(
            booking.id,
            CancelBookingDto {
                reason: Some("changed plans".to_string()),
                refund_amount: Some(200.0),
            },
        )
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(cancelled.is_cancelled);
    assert!(cancelled.cancelled_at.is_some());
    assert_eq!(cancelled.refund_status, Some(RefundStatus::Pending));

    let detail = service.get_by_reference("BK001").await.unwrap();
    assert_eq!(detail.booking.status, BookingStatus::Cancelled);
    assert_eq!(
        detail.booking.cancellation_reason.as_deref(),
        Some("changed plans")
    );
    assert_eq!(detail.booking.refund_amount, Some(200.0));
    assert_eq!(detail.participants.len(), 2);
    assert_eq!(detail.pricing.map(|p| p.total_price), Some(200.0));

    Ok(())
}

/// Expect every part of the aggregate to be stored and returned together
#[tokio::test]
async fn creates_aggregate_in_one_call() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "aggregate").await?;

    let detail = BookingService::new(&test.db)
        .create_with_details(CreateBookingAggregateDto {
            booking: booking_payload(traveler_id, tour_id, Some("BK-AGG")),
            participants: vec![
                participant_payload("Ana", None),
                participant_payload("Ben", None),
            ],
            pricing: Some(pricing_payload()),
            hotel_details: Some(CreateHotelDetailsDto {
                hotel_name: "Harbour Inn".to_string(),
                room_number: Some("12".to_string()),
                address: None,
            }),
            preferences: vec!["vegetarian".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(detail.booking.booking_reference, "BK-AGG");
    assert_eq!(detail.participants.len(), 2);
    assert!(detail.pricing.is_some());
    assert_eq!(
        detail.hotel_details.map(|h| h.hotel_name).as_deref(),
        Some("Harbour Inn")
    );
    assert_eq!(detail.preferences.len(), 1);
    assert!(detail.traveler.is_some());
    assert!(detail.tour.is_some());
    assert!(detail.guide.is_some());

    Ok(())
}

/// Expect nothing to be written when a sub-record is invalid
#[tokio::test]
async fn writes_nothing_when_sub_record_is_invalid() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let (traveler_id, tour_id) = parents(&test, "rollback").await?;

    let result = BookingService::new(&test.db)
        .create_with_details(CreateBookingAggregateDto {
            booking: booking_payload(traveler_id, tour_id, Some("BK-RB")),
            participants: vec![
                participant_payload("Ana", None),
                participant_payload("", None),
            ],
            pricing: None,
            hotel_details: None,
            preferences: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));
    assert_eq!(entity::prelude::Booking::find().count(&test.db).await?, 0);
    assert_eq!(
        entity::prelude::BookingParticipant::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}
