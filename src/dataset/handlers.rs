use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::models::{Dataset, DatasetSummary, PublishDatasetRequest};
use crate::error::MarketError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// List every dataset
///
/// GET /api/v1/consumer/datasets
#[utoipa::path(
    get,
    path = "/api/v1/consumer/datasets",
    responses(
        (status = 200, description = "All datasets", body = ApiResponse<Vec<Dataset>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Datasets"
)]
pub async fn list_datasets(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Dataset>>>), MarketError> {
    let datasets = state.datasets.list_all_datasets().await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(datasets))))
}

/// Get one dataset
///
/// GET /api/v1/consumer/datasets/{dataset_id}
#[utoipa::path(
    get,
    path = "/api/v1/consumer/datasets/{dataset_id}",
    params(
        ("dataset_id" = i64, Path, description = "Dataset ID")
    ),
    responses(
        (status = 200, description = "Dataset found", body = ApiResponse<Dataset>),
        (status = 404, description = "Dataset not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Datasets"
)]
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(dataset_id): Path<i64>,
) -> Result<(StatusCode, Json<ApiResponse<Dataset>>), MarketError> {
    let dataset = state
        .datasets
        .get_dataset_by_id(dataset_id)
        .await?
        .ok_or(MarketError::DatasetNotFound(dataset_id))?;
    Ok((StatusCode::OK, Json(ApiResponse::success(dataset))))
}

/// Catalogue of dataset ids and names
///
/// GET /api/v1/consumer/catalog
#[utoipa::path(
    get,
    path = "/api/v1/consumer/catalog",
    responses(
        (status = 200, description = "Dataset catalogue", body = ApiResponse<Vec<DatasetSummary>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Datasets"
)]
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<DatasetSummary>>>), MarketError> {
    let summaries = state.datasets.list_dataset_summaries().await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(summaries))))
}

/// Publish a dataset on behalf of a provider
///
/// POST /api/v1/provider/datasets
#[utoipa::path(
    post,
    path = "/api/v1/provider/datasets",
    request_body = PublishDatasetRequest,
    responses(
        (status = 201, description = "Dataset published", body = ApiResponse<Dataset>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Datasets"
)]
pub async fn publish_dataset(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PublishDatasetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Dataset>>), MarketError> {
    let dataset = state.datasets.publish_dataset(Dataset::from(req)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(dataset))))
}
