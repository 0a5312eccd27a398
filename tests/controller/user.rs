//! Tests for the user endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tourbook::{
    model::user::CreateUserDto,
    server::controller::{
        user::{create_user, get_user},
        util::{path::Path, payload::Payload},
    },
};

use super::*;
use crate::util::body_json;

fn user_payload(email: &str) -> CreateUserDto {
    CreateUserDto {
        first_name: "Ines".to_string(),
        last_name: "Okafor".to_string(),
        email: email.to_string(),
        phone: None,
        role: None,
        profile_image: None,
        bio: None,
        years_of_experience: None,
    }
}

/// Expect 201 with the traveler role, then 409 for the same email
#[tokio::test]
async fn create_user_then_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let created = create_user(State(state(&test)), Payload(user_payload("ines@example.com"))).await;
    let resp = created.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["role"], "traveler");

    let again = create_user(State(state(&test)), Payload(user_payload("ines@example.com"))).await;
    assert_eq!(again.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn get_missing_user_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(state(&test)), Path(5)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
