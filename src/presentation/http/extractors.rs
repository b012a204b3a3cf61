// src/presentation/http/extractors.rs
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::application::{dto::AuthenticatedUser, error::ApplicationError};

use super::{error::HttpError, state::HttpState};

/// Caller identity proven by a bearer token. Handlers that take this as an
/// argument reject unauthenticated requests before any service code runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let Extension(app) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure("http state not installed"))
            })?;

        let user = app
            .services
            .token_manager()
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

fn bearer_token(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("bearer token required"))
        })
}
