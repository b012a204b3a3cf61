// src/presentation/http/controllers/auth.rs
use crate::{
    application::{
        commands::users::{LoginUserCommand, RegisterUserCommand},
        dto::{LoginResponseDto, UserDto},
    },
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered"),
    )
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .services
        .user_commands
        .register(RegisterUserCommand {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponseDto>> {
    let response = state
        .services
        .user_commands
        .login(LoginUserCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;
    Ok(Json(response))
}

/// Profile of the authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<UserDto>> {
    let user = state
        .services
        .user_queries
        .profile(&actor)
        .await
        .into_http()?;
    Ok(Json(user))
}
