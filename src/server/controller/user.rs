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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::{path::Path, payload::Payload},
        error::Error, model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Register a traveler, local expert or admin
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// List users, optionally filtered by `role`
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("role" = Option<String>, Query, description = "traveler, local-expert or admin")
    ),
    responses(
        (status = 200, description = "A page of users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Error> {
    let users: Vec<UserDto> = UserService::new(&state.db)
        .list(&params)
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted successfully".to_string(),
        }),
    ))
}
