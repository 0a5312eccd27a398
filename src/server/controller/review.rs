use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error, model::app::AppState,
        service::review::ReviewService,
    },
};

pub static REVIEW_TAG: &str = "review";

/// Review a tour
///
/// When a booking is given it may carry at most one live review.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Malformed payload or unresolved reference", body = ErrorDto),
        (status = 409, description = "Booking already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review = ReviewService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// List reviews
///
/// Accepts `page`, `limit`, `tour_id`, `guide_id` and `verified`.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("tour_id" = Option<i32>, Query, description = "Tour id"),
        ("guide_id" = Option<i32>, Query, description = "Guide id"),
        ("verified" = Option<bool>, Query, description = "Verified reviews only")
    ),
    responses(
        (status = 200, description = "A page of reviews, newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review found", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review = ReviewService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(review)))
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<UpdateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review = ReviewService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(review)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ReviewService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Review deleted successfully".to_string(),
        }),
    ))
}
