//! Tests for the participant, pricing, hotel details, preference and payment endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::PaymentStatus;
use tourbook::{
    model::{
        booking::{CreatePreferenceDto, UpdateHotelDetailsDto},
        payment::{CreatePaymentDto, UpdatePaymentStatusDto},
    },
    server::controller::{
        hotel::{get_hotel_details, update_hotel_details},
        participant::{add_participant, list_participants, remove_participant},
        payment::{create_payment, get_payment, update_payment_status},
        preference::{add_preference, list_preferences},
        pricing::{create_pricing, get_pricing},
        util::{path::Path, payload::Payload},
    },
};

use super::*;
use crate::util::{body_json, participant_payload, pricing_payload};

/// Expect 201 on add, the participant in the list, and 404 after removal
#[tokio::test]
async fn participant_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CP").await?;

    let added = add_participant(
        State(state(&test)),
        Path(booking.id),
        Payload(participant_payload("Ana", Some(30))),
    )
    .await;
    let resp = added.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let participant_id = body_json(resp).await["id"].as_i64().unwrap() as i32;

    let listed = list_participants(State(state(&test)), Path(booking.id)).await;
    let body = body_json(listed.into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let removed =
        remove_participant(State(state(&test)), Path((booking.id, participant_id))).await;
    assert_eq!(removed.into_response().status(), StatusCode::OK);

    let again = remove_participant(State(state(&test)), Path((booking.id, participant_id))).await;
    assert_eq!(again.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for an empty participant name and 404 for a missing booking
#[tokio::test]
async fn participant_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CPE").await?;

    let empty = add_participant(
        State(state(&test)),
        Path(booking.id),
        Payload(participant_payload("", None)),
    )
    .await;
    assert_eq!(empty.into_response().status(), StatusCode::BAD_REQUEST);

    let missing = list_participants(State(state(&test)), Path(booking.id + 100)).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 before pricing exists, 201 on create and 409 on a second create
#[tokio::test]
async fn pricing_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CPR").await?;

    let before = get_pricing(State(state(&test)), Path(booking.id)).await;
    assert_eq!(before.into_response().status(), StatusCode::NOT_FOUND);

    let created = create_pricing(
        State(state(&test)),
        Path(booking.id),
        Payload(pricing_payload()),
    )
    .await;
    assert_eq!(created.into_response().status(), StatusCode::CREATED);

    let duplicate = create_pricing(
        State(state(&test)),
        Path(booking.id),
        Payload(pricing_payload()),
    )
    .await;
    assert_eq!(duplicate.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 on hotel details that were never created
#[tokio::test]
async fn hotel_details_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CH").await?;

    let read = get_hotel_details(State(state(&test)), Path(booking.id)).await;
    assert_eq!(read.into_response().status(), StatusCode::NOT_FOUND);

    let update = update_hotel_details(
        State(state(&test)),
        Path(booking.id),
        Payload(UpdateHotelDetailsDto::default()),
    )
    .await;
    assert_eq!(update.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 on add and the preference in the list
#[tokio::test]
async fn preference_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CPF").await?;

    let added = add_preference(
        State(state(&test)),
        Path(booking.id),
        Payload(CreatePreferenceDto {
            preference: "vegetarian".to_string(),
        }),
    )
    .await;
    assert_eq!(added.into_response().status(), StatusCode::CREATED);

    let listed = list_preferences(State(state(&test)), Path(booking.id)).await;
    let body = body_json(listed.into_response()).await;
    assert_eq!(body[0]["preference"], "vegetarian");

    Ok(())
}

/// Expect a recorded payment to be completed through the status route
#[tokio::test]
async fn payment_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CPAY").await?;

    let created = create_payment(
        State(state(&test)),
        Path(booking.id),
        Payload(CreatePaymentDto {
            payment_method: "card".to_string(),
            status: None,
            transaction_id: Some("txn-ctl".to_string()),
            amount: 200.0,
            currency: None,
        }),
    )
    .await;
    let resp = created.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let payment_id = body_json(resp).await["id"].as_i64().unwrap() as i32;

    let updated = update_payment_status(
        State(state(&test)),
        Path((booking.id, payment_id)),
        Payload(UpdatePaymentStatusDto {
            status: PaymentStatus::Completed,
        }),
    )
    .await;
    let resp = updated.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "completed");
    assert!(!body["paid_at"].is_null());

    let missing = get_payment(State(state(&test)), Path((booking.id, payment_id + 1))).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
