//! Tests for the booking endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tourbook::{
    model::booking::CancelBookingDto,
    server::controller::{
        booking::{
            cancel_booking, complete_booking, confirm_booking, create_booking, delete_booking,
            get_booking, get_booking_by_reference, list_bookings,
        },
        util::{path::Path, payload::Payload},
    },
};

use super::*;
use crate::util::{body_json, booking_payload};

/// Expect 201 with the pending booking in the body
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let traveler = test.user().insert_traveler("ctl-traveler@example.com").await?;
    let guide = test.user().insert_guide("ctl-guide@example.com").await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    let result = create_booking(
        State(state(&test)),
        Payload(booking_payload(traveler.id, tour.id, Some("BK001"))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["booking_reference"], "BK001");
    assert_eq!(body["status"], "pending");

    Ok(())
}

/// Expect 400 when the tour does not resolve
#[tokio::test]
async fn create_with_unknown_tour_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let traveler = test.user().insert_traveler("ctl-traveler@example.com").await?;

    let result = create_booking(
        State(state(&test)),
        Payload(booking_payload(traveler.id, 404, None)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Tour not found");

    Ok(())
}

/// Expect 409 when the reference is already taken
#[tokio::test]
async fn create_with_taken_reference_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK001").await?;

    let result = create_booking(
        State(state(&test)),
        Payload(booking_payload(
            booking.traveler_id,
            booking.tour_id,
            Some("BK001"),
        )),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 for a live booking, by id and by reference
#[tokio::test]
async fn get_returns_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-GET").await?;

    let by_id = get_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(by_id.into_response().status(), StatusCode::OK);

    let by_reference =
        get_booking_by_reference(State(state(&test)), Path("BK-GET".to_string())).await;
    let resp = by_reference.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], booking.id);
    assert!(body["participants"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 404 for a missing booking
#[tokio::test]
async fn get_missing_booking_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let result = get_booking(State(state(&test)), Path(1)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a JSON array of bookings
#[tokio::test]
async fn list_returns_bookings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    test.booking().insert_with_parents("BK-L1").await?;
    test.booking().insert_with_parents("BK-L2").await?;

    let result = list_bookings(State(state(&test)), Query(HashMap::new())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 409 when completing a pending booking and 200 once it is confirmed
#[tokio::test]
async fn status_routes_follow_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-LC").await?;

    let early = complete_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(early.into_response().status(), StatusCode::CONFLICT);

    let confirmed = confirm_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(confirmed.into_response().status(), StatusCode::OK);

    let completed = complete_booking(State(state(&test)), Path(booking.id)).await;
    let resp = completed.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "completed");

    let cancelled = cancel_booking(
        State(state(&test)),
        Path(booking.id),
        Payload(CancelBookingDto::default()),
    )
    .await;
    assert_eq!(cancelled.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 on cancel with the refund recorded as pending
#[tokio::test]
async fn cancel_records_refund() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CX").await?;

    let result = cancel_booking(
        State(state(&test)),
        Path(booking.id),
        Payload(CancelBookingDto {
            reason: Some("changed plans".to_string()),
            refund_amount: Some(200.0),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "cancelled");
    assert_eq!(body["is_cancelled"], true);
    assert_eq!(body["refund_status"], "pending");

    Ok(())
}

/// Expect 200 on the first delete and 404 afterwards
#[tokio::test]
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-DEL").await?;

    let first = delete_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(first.into_response().status(), StatusCode::OK);

    let second = delete_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(second.into_response().status(), StatusCode::NOT_FOUND);

    let read = get_booking(State(state(&test)), Path(booking.id)).await;
    assert_eq!(read.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
