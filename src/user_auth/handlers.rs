use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::models::{LoginRequest, RegisterRequest, User};
use crate::error::MarketError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<User>),
        (status = 400, description = "Unknown role or status"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), MarketError> {
    let candidate = User::try_from(req)?;
    let user = state.users.register_user(candidate).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

/// Login user
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<User>),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), MarketError> {
    match state.users.authenticate(&req.email, &req.password).await? {
        Some(user) => Ok((StatusCode::OK, Json(ApiResponse::success(user)))),
        None => {
            tracing::warn!(email = %req.email, "Login failed");
            Err(MarketError::InvalidCredentials)
        }
    }
}

/// List every registered user
///
/// GET /api/v1/admin/users
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<User>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<User>>>), MarketError> {
    let users = state.users.list_all_users().await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(users))))
}
