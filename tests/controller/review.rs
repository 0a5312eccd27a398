//! Tests for the review endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tourbook::{
    model::review::CreateReviewDto,
    server::controller::{
        review::{create_review, delete_review, get_review},
        util::{path::Path, payload::Payload},
    },
};

use super::*;
use crate::util::body_json;

fn review_payload(tour_id: i32, reviewer_id: i32, booking_id: Option<i32>) -> CreateReviewDto {
    CreateReviewDto {
        tour_id,
        reviewer_id,
        booking_id,
        title: "Lovely".to_string(),
        comment: "Would book again".to_string(),
        rating: 4,
        detailed_ratings: None,
        images: Vec::new(),
    }
}

/// Expect 201 on create, 409 on a second review of the same booking
#[tokio::test]
async fn create_review_once_per_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CR").await?;

    let created = create_review(
        State(state(&test)),
        Payload(review_payload(
            booking.tour_id,
            booking.traveler_id,
            Some(booking.id),
        )),
    )
    .await;
    let resp = created.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["verified"], false);

    let again = create_review(
        State(state(&test)),
        Payload(review_payload(
            booking.tour_id,
            booking.traveler_id,
            Some(booking.id),
        )),
    )
    .await;
    assert_eq!(again.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 when the reviewer does not exist
#[tokio::test]
async fn create_review_with_unknown_reviewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CR2").await?;

    let result = create_review(
        State(state(&test)),
        Payload(review_payload(booking.tour_id, 999, None)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Reviewer not found");

    Ok(())
}

/// Expect 404 on reading a deleted review
#[tokio::test]
async fn deleted_review_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-CR3").await?;

    let created = create_review(
        State(state(&test)),
        Payload(review_payload(booking.tour_id, booking.traveler_id, None)),
    )
    .await;
    let review_id = body_json(created.into_response()).await["id"]
        .as_i64()
        .unwrap() as i32;

    let deleted = delete_review(State(state(&test)), Path(review_id)).await;
    assert_eq!(deleted.into_response().status(), StatusCode::OK);

    let read = get_review(State(state(&test)), Path(review_id)).await;
    assert_eq!(read.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
