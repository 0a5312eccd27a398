//! Requests sent through the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tourbook::server::{model::app::AppState, router::routes};
use tourbook_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_json;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect a body missing required fields to be a 400 with an error message
#[tokio::test]
async fn malformed_booking_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/v1/bookings",
            r#"{"traveler_id": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));

    Ok(())
}

/// Expect a body that is not JSON at all to be a 400
#[tokio::test]
async fn non_json_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(Method::PUT, "/api/v1/bookings/1/cancel", "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a non-numeric id to be a 400 with the JSON error body
#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/v1/bookings/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));

    Ok(())
}

/// Expect an unknown field on an update to be rejected
#[tokio::test]
async fn update_rejects_status_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-RT").await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/bookings/{}", booking.id),
            r#"{"status": "completed"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a booking created through the router to be readable by its reference
#[tokio::test]
async fn creates_and_reads_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let traveler = test.user().insert_traveler("router@example.com").await?;
    let guide = test.user().insert_guide("router-guide@example.com").await?;
    let tour = test.tour().insert_tour(guide.id).await?;

    let body = serde_json::json!({
        "booking_reference": "BK-ROUTER",
        "traveler_id": traveler.id,
        "tour_id": tour.id,
        "total_participants": 2,
        "start_date": "2024-06-01",
        "end_date": "2024-06-01",
        "total_price": 200.0,
        "participants": [{ "name": "Ana" }, { "name": "Ben" }],
        "preferences": ["vegetarian"]
    });
    let created = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/v1/bookings/aggregate",
            &body.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let read = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/v1/bookings/reference/BK-ROUTER")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(read.status(), StatusCode::OK);
    let body = body_json(read).await;
    assert_eq!(body["participants"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["preferences"][0]["preference"], "vegetarian");

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"]["/api/v1/bookings/{id}/cancel"].is_object());

    Ok(())
}
