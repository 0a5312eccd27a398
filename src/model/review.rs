use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub tour_id: i32,
    pub guide_id: i32,
    pub booking_id: Option<i32>,
    pub reviewer_id: i32,
    pub reviewer_name: String,
    pub reviewer_image: Option<String>,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub helpful_count: i32,
    pub verified: bool,
    pub guide_response: Option<String>,
    pub guide_response_date: Option<NaiveDateTime>,
    pub detailed_ratings: Option<DetailedRatingsDto>,
    pub images: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ReviewDto {
    /// Builds the DTO from a review row and its attachments
    pub fn from_parts(
        review: entity::review::Model,
        detailed_ratings: Option<entity::review_detailed_ratings::Model>,
        images: Vec<entity::review_image::Model>,
    ) -> Self {
        Self {
            id: review.id,
            tour_id: review.tour_id,
            guide_id: review.guide_id,
            booking_id: review.booking_id,
            reviewer_id: review.reviewer_id,
            reviewer_name: review.reviewer_name,
            reviewer_image: review.reviewer_image,
            title: review.title,
            comment: review.comment,
            rating: review.rating,
            helpful_count: review.helpful_count,
            verified: review.verified,
            guide_response: review.guide_response,
            guide_response_date: review.guide_response_date,
            detailed_ratings: detailed_ratings.map(DetailedRatingsDto::from),
            images: images.into_iter().map(|image| image.image_url).collect(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Per-aspect scores, each between 1 and 5
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailedRatingsDto {
    pub accuracy: Option<i32>,
    pub communication: Option<i32>,
    pub cleanliness: Option<i32>,
    pub location: Option<i32>,
    pub value: Option<i32>,
}

impl From<entity::review_detailed_ratings::Model> for DetailedRatingsDto {
    fn from(ratings: entity::review_detailed_ratings::Model) -> Self {
        Self {
            accuracy: ratings.accuracy,
            communication: ratings.communication,
            cleanliness: ratings.cleanliness,
            location: ratings.location,
            value: ratings.value_score,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub tour_id: i32,
    pub reviewer_id: i32,
    pub booking_id: Option<i32>,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub detailed_ratings: Option<DetailedRatingsDto>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateReviewDto {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i32>,
    pub verified: Option<bool>,
    pub helpful_count: Option<i32>,
    /// Setting a response also stamps `guide_response_date`
    pub guide_response: Option<String>,
}
