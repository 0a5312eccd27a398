use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::Error;

/// JSON request body whose rejections surface as [`Error::MalformedInput`]
///
/// Wraps [`Json`] so that a missing content type, unparseable JSON or a body that does not
/// match the expected shape all reach the client as a 400 with the same [`ErrorDto`] body as
/// every other error.
///
/// [`ErrorDto`]: crate::model::api::ErrorDto
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::MalformedInput(rejection.body_text())),
        }
    }
}
