//! Tests for BookingService::delete.

use std::collections::HashMap;

use tourbook::{
    model::review::CreateReviewDto,
    server::{
        error::{resource::Resource, Error},
        service::{
            participant::ParticipantService, review::ReviewService, tour::TourService,
            user::UserService,
        },
    },
};

use super::*;

/// Expect a deleted booking to vanish from reads and lists while its reference stays taken
#[tokio::test]
async fn deleted_booking_is_invisible() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-D1").await?;
    let service = BookingService::new(&test.db);

    service.delete(booking.id).await.unwrap();

    assert!(matches!(
        service.get(booking.id).await,
        Err(Error::NotFound(Resource::Booking))
    ));
    assert!(matches!(
        service.get_by_reference("BK-D1").await,
        Err(Error::NotFound(Resource::Booking))
    ));
    assert!(service.list(&HashMap::new()).await.unwrap().is_empty());

    let result = service
        .create(booking_payload(booking.traveler_id, booking.tour_id, Some("BK-D1")))
        .await;
    assert!(matches!(
        result,
        Err(Error::AlreadyExists(Resource::Booking))
    ));

    Ok(())
}

/// Expect deleting twice to fail the second time
#[tokio::test]
async fn fails_when_already_deleted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-D2").await?;
    let service = BookingService::new(&test.db);

    service.delete(booking.id).await.unwrap();
    let result = service.delete(booking.id).await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Booking))));

    Ok(())
}

/// Expect sub-record operations on a deleted booking to report the booking missing
#[tokio::test]
async fn sub_records_of_deleted_booking_are_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-D3").await?;
    test.booking().insert_participant(booking.id, "Ana").await?;

    BookingService::new(&test.db)
        .delete(booking.id)
        .await
        .unwrap();
    let result = ParticipantService::new(&test.db).list(booking.id).await;

    assert!(matches!(result, Err(Error::NotFound(Resource::Booking))));

    Ok(())
}

/// Expect the review written for a booking to outlive the booking
#[tokio::test]
async fn review_survives_booking_delete() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-D4").await?;
    let reviews = ReviewService::new(&test.db);
    let review = reviews
        .create(CreateReviewDto {
            tour_id: booking.tour_id,
            reviewer_id: booking.traveler_id,
            booking_id: Some(booking.id),
            title: "Lovely morning".to_string(),
            comment: "Worth the early start".to_string(),
            rating: 4,
            detailed_ratings: None,
            images: Vec::new(),
        })
        .await
        .unwrap();

    BookingService::new(&test.db)
        .delete(booking.id)
        .await
        .unwrap();
    let kept = reviews.get(review.id).await.unwrap();

    assert_eq!(kept.booking_id, Some(booking.id));
    assert_eq!(kept.rating, 4);

    Ok(())
}

/// Expect a booking to keep its tour and traveler after both are deleted
#[tokio::test]
async fn keeps_references_to_deleted_tour_and_traveler() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booking = test.booking().insert_with_parents("BK-D5").await?;

    TourService::new(&test.db)
        .delete(booking.tour_id)
        .await
        .unwrap();
    UserService::new(&test.db)
        .delete(booking.traveler_id)
        .await
        .unwrap();
    let detail = BookingService::new(&test.db).get(booking.id).await.unwrap();

    assert_eq!(detail.booking.id, booking.id);
    assert_eq!(detail.tour.map(|t| t.id), Some(booking.tour_id));
    assert_eq!(detail.traveler.map(|t| t.id), Some(booking.traveler_id));

    Ok(())
}
