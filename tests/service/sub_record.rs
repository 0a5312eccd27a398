//! Tests for the participant, pricing, hotel details and preference services.

use tourbook::{
    model::booking::{CreateHotelDetailsDto, UpdateHotelDetailsDto, UpdatePricingDto},
    server::{
        error::{resource::Resource, Error},
        service::{
            hotel::HotelDetailsService, participant::ParticipantService,
            preference::PreferenceService, pricing::PricingService,
        },
    },
};
use tourbook_test_utils::prelude::*;

use crate::util::{participant_payload, pricing_payload};

/// Expect a removed participant to drop out of the list
#[tokio::test]
async fn adds_lists_and_removes_participants() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-P1").await?;
    let service = ParticipantService::new(&test.db);

    let ana = service
        .add(booking.id, participant_payload("Ana", Some(30)))
        .await
        .unwrap();
    service
        .add(booking.id, participant_payload("Ben", None))
        .await
        .unwrap();
    service.remove(booking.id, ana.id).await.unwrap();

    let participants = service.list(booking.id).await.unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].name, "Ben");

    let result = service.remove(booking.id, ana.id).await;
    assert!(matches!(result, Err(Error::NotFound(Resource::Participant))));

    Ok(())
}

/// Expect a booking without participants to list none
#[tokio::test]
async fn lists_no_participants_for_new_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-P2").await?;

    let participants = ParticipantService::new(&test.db)
        .list(booking.id)
        .await
        .unwrap();

    assert!(participants.is_empty());

    Ok(())
}

/// Expect participant operations on a missing booking to fail with NotFound(Booking)
#[tokio::test]
async fn rejects_participant_for_missing_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let result = ParticipantService::new(&test.db)
        .add(77, participant_payload("Ana", None))
        .await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Booking))));

    Ok(())
}

/// Expect a second pricing record for the same booking to conflict
#[tokio::test]
async fn allows_one_pricing_per_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PR1").await?;
    let service = PricingService::new(&test.db);

    service
        .create(booking.id, pricing_payload())
        .await
        .unwrap();
    let result = service.create(booking.id, pricing_payload()).await;

    assert!(matches!(result, Err(Error::AlreadyExists(Resource::Pricing))));

    Ok(())
}

/// Expect only the supplied pricing fields to change
#[tokio::test]
async fn updates_pricing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PR2").await?;
    let service = PricingService::new(&test.db);
    service
        .create(booking.id, pricing_payload())
        .await
        .unwrap();

    let pricing = service
        .update(
            booking.id,
            UpdatePricingDto {
                discount_amount: Some(20.0),
                total_price: Some(180.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(pricing.total_price, 180.0);
    assert_eq!(pricing.discount_amount, Some(20.0));
    assert_eq!(pricing.subtotal, 200.0);

    Ok(())
}

/// Expect NotFound(Pricing) for a booking without pricing
#[tokio::test]
async fn reports_missing_pricing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PR3").await?;

    let result = PricingService::new(&test.db).get(booking.id).await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Pricing))));

    Ok(())
}

/// Expect a negative pricing amount to be rejected
#[tokio::test]
async fn rejects_negative_pricing_amount() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PR4").await?;

    let mut payload = pricing_payload();
    payload.tax = Some(-5.0);
    let result = PricingService::new(&test.db).create(booking.id, payload).await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));

    Ok(())
}

/// Expect hotel details to be created once and then updated in place
#[tokio::test]
async fn creates_and_updates_hotel_details() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-H1").await?;
    let service = HotelDetailsService::new(&test.db);
    let payload = CreateHotelDetailsDto {
        hotel_name: "Harbour Inn".to_string(),
        room_number: None,
        address: Some("1 Quay Street".to_string()),
    };

    service.create(booking.id, payload.clone()).await.unwrap();
    let duplicate = service.create(booking.id, payload).await;
    assert!(matches!(
        duplicate,
        Err(Error::AlreadyExists(Resource::HotelDetails))
    ));

    let hotel = service
        .update(
            booking.id,
            UpdateHotelDetailsDto {
                room_number: Some("204".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(hotel.hotel_name, "Harbour Inn");
    assert_eq!(hotel.room_number.as_deref(), Some("204"));

    Ok(())
}

/// Expect preferences to be listed in the order they were added
#[tokio::test]
async fn records_preferences() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-PF1").await?;
    let service = PreferenceService::new(&test.db);

    service
        .add(booking.id, "vegetarian".to_string())
        .await
        .unwrap();
    service
        .add(booking.id, "window seat".to_string())
        .await
        .unwrap();

    let preferences: Vec<String> = service
        .list(booking.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.preference)
        .collect();
    assert_eq!(preferences, vec!["vegetarian", "window seat"]);

    Ok(())
}
