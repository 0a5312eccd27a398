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
        tour::{CreateTourDto, TourDetailDto, TourDto, TourSummaryDto, UpdateTourDto},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error, model::app::AppState,
        service::tour::TourService,
    },
};

pub static TOUR_TAG: &str = "tour";

/// Publish a tour with its images, itinerary, tags, includes and excludes
#[utoipa::path(
    post,
    path = "/api/v1/tours",
    tag = TOUR_TAG,
    request_body = CreateTourDto,
    responses(
        (status = 201, description = "Tour created", body = TourDetailDto),
        (status = 400, description = "Malformed payload or unresolved reference", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tour(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateTourDto>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(tour)))
}

/// List tours
///
/// Accepts `page`, `limit`, `category`, `destination`, `guide_id`, `min_price`, `max_price`,
/// `sort` (`created_at`, `price`, `rating`, `title`, `duration`) and `order` (`asc` or `desc`).
#[utoipa::path(
    get,
    path = "/api/v1/tours",
    tag = TOUR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("category" = Option<i32>, Query, description = "Category id"),
        ("destination" = Option<i32>, Query, description = "Destination id"),
        ("guide_id" = Option<i32>, Query, description = "Guide id"),
        ("min_price" = Option<f64>, Query, description = "Lowest price amount"),
        ("max_price" = Option<f64>, Query, description = "Highest price amount"),
        ("sort" = Option<String>, Query, description = "Sort column"),
        ("order" = Option<String>, Query, description = "Sort direction")
    ),
    responses(
        (status = 200, description = "A page of tours", body = Vec<TourSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Error> {
    let tours = TourService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(tours)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour id")),
    responses(
        (status = 200, description = "Tour found", body = TourDetailDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(tour)))
}

#[utoipa::path(
    put,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour id")),
    request_body = UpdateTourDto,
    responses(
        (status = 200, description = "Tour updated", body = TourDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<UpdateTourDto>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(TourDto::from(tour))))
}

/// Soft-delete a tour
///
/// Bookings and reviews of the tour are kept.
#[utoipa::path(
    delete,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour id")),
    responses(
        (status = 200, description = "Tour deleted", body = MessageDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TourService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Tour deleted successfully".to_string(),
        }),
    ))
}
