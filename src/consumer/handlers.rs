use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::models::{CreateConsumerRequest, DataConsumer};
use crate::error::MarketError;
use crate::gateway::{state::AppState, types::ApiResponse};
use crate::payment::Payment;

/// Create a consumer billing profile
///
/// POST /api/v1/consumers
#[utoipa::path(
    post,
    path = "/api/v1/consumers",
    request_body = CreateConsumerRequest,
    responses(
        (status = 201, description = "Consumer created", body = ApiResponse<DataConsumer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Consumers"
)]
pub async fn create_consumer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateConsumerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DataConsumer>>), MarketError> {
    let consumer = state
        .consumers
        .create_consumer(DataConsumer::from(req))
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(consumer))))
}

/// List every consumer profile
///
/// GET /api/v1/consumers
#[utoipa::path(
    get,
    path = "/api/v1/consumers",
    responses(
        (status = 200, description = "All consumers", body = ApiResponse<Vec<DataConsumer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Consumers"
)]
pub async fn list_consumers(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<DataConsumer>>>), MarketError> {
    let consumers = state.consumers.list_consumers().await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(consumers))))
}

/// GET /api/v1/consumers/{consumer_id}
#[utoipa::path(
    get,
    path = "/api/v1/consumers/{consumer_id}",
    params(
        ("consumer_id" = i64, Path, description = "Consumer ID")
    ),
    responses(
        (status = 200, description = "Consumer found", body = ApiResponse<DataConsumer>),
        (status = 404, description = "Consumer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Consumers"
)]
pub async fn get_consumer(
    State(state): State<Arc<AppState>>,
    Path(consumer_id): Path<i64>,
) -> Result<(StatusCode, Json<ApiResponse<DataConsumer>>), MarketError> {
    let consumer = state
        .consumers
        .get_consumer(consumer_id)
        .await?
        .ok_or(MarketError::ConsumerNotFound(consumer_id))?;
    Ok((StatusCode::OK, Json(ApiResponse::success(consumer))))
}

/// Payment history of one consumer
///
/// GET /api/v1/consumers/{consumer_id}/payments
#[utoipa::path(
    get,
    path = "/api/v1/consumers/{consumer_id}/payments",
    params(
        ("consumer_id" = i64, Path, description = "Consumer ID")
    ),
    responses(
        (status = 200, description = "Payments of the consumer", body = ApiResponse<Vec<Payment>>),
        (status = 404, description = "Consumer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Consumers"
)]
pub async fn list_consumer_payments(
    State(state): State<Arc<AppState>>,
    Path(consumer_id): Path<i64>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Payment>>>), MarketError> {
    let payments = state
        .payments
        .list_payments_for_consumer(consumer_id)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}
