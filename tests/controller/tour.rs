//! Tests for the tour endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tourbook::{
    model::tour::UpdateTourDto,
    server::controller::{
        tour::{delete_tour, get_tour, list_tours, update_tour},
        util::{path::Path, payload::Payload},
    },
};

use super::*;
use crate::util::body_json;

/// Expect 200 with the tour detail and its collections
#[tokio::test]
async fn get_returns_tour_detail() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tour_tables().build().await?;
    let guide = test.user().insert_guide("tour-guide@example.com").await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    let result = get_tour(State(state(&test)), Path(tour.id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], tour.id);
    assert_eq!(body["guide"]["id"], guide.id);
    assert!(body["itinerary"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 200 on update with the new price
#[tokio::test]
async fn update_changes_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tour_tables().build().await?;
    let guide = test.user().insert_guide("tour-guide@example.com").await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    let result = update_tour(
        State(state(&test)),
        Path(tour.id),
        Payload(UpdateTourDto {
            price_amount: Some(120.0),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["price_amount"], 120.0);

    Ok(())
}

/// Expect a deleted tour to leave the list and answer 404
#[tokio::test]
async fn delete_hides_tour() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tour_tables().build().await?;
    let guide = test.user().insert_guide("tour-guide@example.com").await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    let deleted = delete_tour(State(state(&test)), Path(tour.id)).await;
    assert_eq!(deleted.into_response().status(), StatusCode::OK);

    let listed = list_tours(State(state(&test)), Query(HashMap::new())).await;
    let body = body_json(listed.into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    let read = get_tour(State(state(&test)), Path(tour.id)).await;
    assert_eq!(read.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
