//! Tests for ReviewService.

use std::collections::HashMap;

use tourbook::{
    model::review::{CreateReviewDto, DetailedRatingsDto, UpdateReviewDto},
    server::{
        error::{resource::ReferenceKind, resource::Resource, Error},
        service::{booking::BookingService, review::ReviewService},
    },
};
use tourbook_test_utils::prelude::*;

fn review_payload(tour_id: i32, reviewer_id: i32, booking_id: Option<i32>) -> CreateReviewDto {
    CreateReviewDto {
        tour_id,
        reviewer_id,
        booking_id,
        title: "Great walk".to_string(),
        comment: "Our guide knew every street".to_string(),
        rating: 5,
        detailed_ratings: None,
        images: Vec::new(),
    }
}

/// Expect the guide and reviewer details to be taken from the tour and the reviewer
#[tokio::test]
async fn creates_review_with_attachments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R1").await?;

    let mut payload = review_payload(booking.tour_id, booking.traveler_id, Some(booking.id));
    payload.detailed_ratings = Some(DetailedRatingsDto {
        accuracy: Some(5),
        communication: Some(4),
        cleanliness: None,
        location: Some(5),
        value: Some(3),
    });
    payload.images = vec![
        "https://img.example.com/1.jpg".to_string(),
        "https://img.example.com/2.jpg".to_string(),
    ];
    let review = ReviewService::new(&test.db).create(payload).await.unwrap();

    assert_eq!(review.guide_id, booking.guide_id);
    assert_eq!(review.reviewer_name, "Test User");
    assert!(!review.verified);
    assert_eq!(review.detailed_ratings.and_then(|r| r.value), Some(3));
    assert_eq!(review.images.len(), 2);

    Ok(())
}

/// Expect a second review for the same booking to conflict
#[tokio::test]
async fn allows_one_review_per_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R2").await?;
    let service = ReviewService::new(&test.db);

    service
        .create(review_payload(
            booking.tour_id,
            booking.traveler_id,
            Some(booking.id),
        ))
        .await
        .unwrap();
    let result = service
        .create(review_payload(
            booking.tour_id,
            booking.traveler_id,
            Some(booking.id),
        ))
        .await;

    assert!(matches!(result, Err(Error::AlreadyExists(Resource::Review))));

    Ok(())
}

/// Expect a rating outside 1 to 5 to be rejected
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R3").await?;

    let mut payload = review_payload(booking.tour_id, booking.traveler_id, None);
    payload.rating = 6;
    let result = ReviewService::new(&test.db).create(payload).await;

    assert!(matches!(result, Err(Error::MalformedInput(_))));

    Ok(())
}

/// Expect a deleted booking to be an unresolved reference
#[tokio::test]
async fn rejects_review_of_deleted_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R4").await?;
    BookingService::new(&test.db)
        .delete(booking.id)
        .await
        .unwrap();

    let result = ReviewService::new(&test.db)
        .create(review_payload(
            booking.tour_id,
            booking.traveler_id,
            Some(booking.id),
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::ReferenceNotFound(ReferenceKind::Booking))
    ));

    Ok(())
}

/// Expect a guide response to be stamped with its date
#[tokio::test]
async fn stamps_guide_response_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R5").await?;
    let service = ReviewService::new(&test.db);
    let review = service
        .create(review_payload(booking.tour_id, booking.traveler_id, None))
        .await
        .unwrap();

    let updated = service
        .update(
            review.id,
            UpdateReviewDto {
                guide_response: Some("Thank you!".to_string()),
                verified: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.guide_response.as_deref(), Some("Thank you!"));
    assert!(updated.guide_response_date.is_some());
    assert!(updated.verified);

    Ok(())
}

/// Expect the verified filter to narrow the list and deleted reviews to disappear
#[tokio::test]
async fn lists_reviews_by_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-R6").await?;
    let service = ReviewService::new(&test.db);
    let first = service
        .create(review_payload(booking.tour_id, booking.traveler_id, None))
        .await
        .unwrap();
    let second = service
        .create(review_payload(booking.tour_id, booking.traveler_id, None))
        .await
        .unwrap();
    service
        .update(
            first.id,
            UpdateReviewDto {
                verified: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    service.delete(second.id).await.unwrap();

    let verified = service
        .list(&HashMap::from([("verified".to_string(), "true".to_string())]))
        .await
        .unwrap();
    assert_eq!(verified.len(), 1);
    assert_eq!(verified[0].id, first.id);

    let unverified = service
        .list(&HashMap::from([("verified".to_string(), "false".to_string())]))
        .await
        .unwrap();
    assert!(unverified.is_empty());

    Ok(())
}
