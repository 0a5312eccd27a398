//! Tour reviews.
//!
//! A review belongs to a tour and its guide and may point back at the booking it came from.
//! The booking link is a reference only: deleting the booking leaves the review in place.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ConnectionTrait, DatabaseConnection, IntoActiveModel, TransactionTrait,
};

use crate::{
    model::review::{CreateReviewDto, DetailedRatingsDto, ReviewDto, UpdateReviewDto},
    server::{
        data::{
            query::{ListQuery, QueryParams, ReviewFilter},
            review::{attachment::ReviewAttachmentRepository, review::ReviewRepository},
        },
        error::{resource::Resource, Error},
        model::db::ReviewModel,
        service::reference::ReferenceValidator,
    },
};

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review with its detailed ratings and images
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review
    /// - `Err(Error::MalformedInput)` - A rating outside 1 to 5 or an empty title or comment
    /// - `Err(Error::ReferenceNotFound)` - Tour, reviewer or booking is not live
    /// - `Err(Error::AlreadyExists)` - The booking already has a review
    pub async fn create(&self, payload: CreateReviewDto) -> Result<ReviewDto, Error> {
        validate_rating("rating", payload.rating)?;
        if let Some(ratings) = &payload.detailed_ratings {
            validate_detailed_ratings(ratings)?;
        }
        if payload.title.trim().is_empty() || payload.comment.trim().is_empty() {
            return Err(Error::MalformedInput(
                "title and comment must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let validator = ReferenceValidator::new(&txn);
        let tour = validator.tour(payload.tour_id).await?;
        let reviewer = validator.reviewer(payload.reviewer_id).await?;

        let review_repo = ReviewRepository::new(&txn);
        if let Some(booking_id) = payload.booking_id {
            let booking = validator.booking(booking_id).await?;

            if review_repo.get_by_booking(booking.id).await?.is_some() {
                return Err(Error::AlreadyExists(Resource::Review));
            }
        }

        let review = review_repo
            .create(entity::review::ActiveModel {
                tour_id: ActiveValue::Set(tour.id),
                guide_id: ActiveValue::Set(tour.guide_id),
                booking_id: ActiveValue::Set(payload.booking_id),
                reviewer_id: ActiveValue::Set(reviewer.id),
                reviewer_name: ActiveValue::Set(format!(
                    "{} {}",
                    reviewer.first_name, reviewer.last_name
                )),
                reviewer_image: ActiveValue::Set(reviewer.profile_image),
                title: ActiveValue::Set(payload.title),
                comment: ActiveValue::Set(payload.comment),
                rating: ActiveValue::Set(payload.rating),
                helpful_count: ActiveValue::Set(0),
                verified: ActiveValue::Set(false),
                ..Default::default()
            })
            .await?;

        let attachment_repo = ReviewAttachmentRepository::new(&txn);
        if let Some(ratings) = payload.detailed_ratings {
            attachment_repo
                .create_ratings(entity::review_detailed_ratings::ActiveModel {
                    review_id: ActiveValue::Set(review.id),
                    accuracy: ActiveValue::Set(ratings.accuracy),
                    communication: ActiveValue::Set(ratings.communication),
                    cleanliness: ActiveValue::Set(ratings.cleanliness),
                    location: ActiveValue::Set(ratings.location),
                    value_score: ActiveValue::Set(ratings.value),
                    ..Default::default()
                })
                .await?;
        }
        for image_url in payload.images {
            attachment_repo.create_image(review.id, image_url).await?;
        }

        txn.commit().await?;

        tracing::info!("Created review {} for tour {}", review.id, review.tour_id);

        self.get(review.id).await
    }

    /// Gets a live review with its detailed ratings and images
    pub async fn get(&self, review_id: i32) -> Result<ReviewDto, Error> {
        let review = self.find(review_id).await?;

        assemble_reviews(self.db, vec![review])
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NotFound(Resource::Review))
    }

    /// Lists a page of live reviews, newest first
    pub async fn list(&self, params: &QueryParams) -> Result<Vec<ReviewDto>, Error> {
        let reviews = ReviewRepository::new(self.db)
            .list(ListQuery::<ReviewFilter>::from_params(params))
            .await?;

        assemble_reviews(self.db, reviews).await
    }

    /// Updates the supplied fields of a live review
    ///
    /// Setting a guide response stamps its response date.
    pub async fn update(&self, review_id: i32, payload: UpdateReviewDto) -> Result<ReviewDto, Error> {
        if let Some(rating) = payload.rating {
            validate_rating("rating", rating)?;
        }
        if payload.helpful_count.is_some_and(|count| count < 0) {
            return Err(Error::MalformedInput(
                "helpful_count must not be negative".to_string(),
            ));
        }

        let review = self.find(review_id).await?;

        let mut active = review.into_active_model();
        if let Some(title) = payload.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(comment) = payload.comment {
            active.comment = ActiveValue::Set(comment);
        }
        if let Some(rating) = payload.rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(verified) = payload.verified {
            active.verified = ActiveValue::Set(verified);
        }
        if let Some(helpful_count) = payload.helpful_count {
            active.helpful_count = ActiveValue::Set(helpful_count);
        }
        if let Some(guide_response) = payload.guide_response {
            active.guide_response = ActiveValue::Set(Some(guide_response));
            active.guide_response_date = ActiveValue::Set(Some(Utc::now().naive_utc()));
        }

        let review = ReviewRepository::new(self.db).update(active).await?;

        self.get(review.id).await
    }

    /// Soft-deletes a live review
    pub async fn delete(&self, review_id: i32) -> Result<(), Error> {
        let result = ReviewRepository::new(self.db).soft_delete(review_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(Resource::Review));
        }

        Ok(())
    }

    async fn find(&self, review_id: i32) -> Result<ReviewModel, Error> {
        ReviewRepository::new(self.db)
            .get(review_id)
            .await?
            .ok_or(Error::NotFound(Resource::Review))
    }
}

/// Attaches detailed ratings and images to reviews, keeping their order
pub(crate) async fn assemble_reviews<C: ConnectionTrait>(
    db: &C,
    reviews: Vec<ReviewModel>,
) -> Result<Vec<ReviewDto>, Error> {
    if reviews.is_empty() {
        return Ok(Vec::new());
    }

    let review_ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    let attachment_repo = ReviewAttachmentRepository::new(db);

    let mut ratings: HashMap<i32, _> = attachment_repo
        .ratings_for(review_ids.clone())
        .await?
        .into_iter()
        .map(|r| (r.review_id, r))
        .collect();

    let mut images: HashMap<i32, Vec<_>> = HashMap::new();
    for image in attachment_repo.images_for(review_ids).await? {
        images.entry(image.review_id).or_default().push(image);
    }

    Ok(reviews
        .into_iter()
        .map(|review| {
            let id = review.id;
            ReviewDto::from_parts(
                review,
                ratings.remove(&id),
                images.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

fn validate_rating(field: &str, rating: i32) -> Result<(), Error> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::MalformedInput(format!(
            "{field} must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }

    Ok(())
}

fn validate_detailed_ratings(ratings: &DetailedRatingsDto) -> Result<(), Error> {
    for (field, value) in [
        ("accuracy", ratings.accuracy),
        ("communication", ratings.communication),
        ("cleanliness", ratings.cleanliness),
        ("location", ratings.location),
        ("value", ratings.value),
    ] {
        if let Some(value) = value {
            validate_rating(field, value)?;
        }
    }

    Ok(())
}
