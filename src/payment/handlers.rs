use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::models::{CreatePaymentRequest, Payment};
use crate::error::MarketError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Record a payment for an existing consumer
///
/// POST /api/v1/payments
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = ApiResponse<Payment>),
        (status = 404, description = "Consumer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Payment>>), MarketError> {
    let payment = state
        .payments
        .create_payment(
            req.consumer_id,
            req.amount,
            &req.method,
            &req.payment_type,
            &req.note,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(payment))))
}

/// GET /api/v1/payments/{payment_id}
#[utoipa::path(
    get,
    path = "/api/v1/payments/{payment_id}",
    params(
        ("payment_id" = i64, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment found", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(payment_id): Path<i64>,
) -> Result<(StatusCode, Json<ApiResponse<Payment>>), MarketError> {
    let payment = state
        .payments
        .get_payment(payment_id)
        .await?
        .ok_or(MarketError::PaymentNotFound(payment_id))?;
    Ok((StatusCode::OK, Json(ApiResponse::success(payment))))
}
