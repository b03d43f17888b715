pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{consumer, dataset, payment, user_auth};
use state::AppState;

/// Build the HTTP router over the shared state
pub fn router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(user_auth::handlers::register))
        .route("/login", post(user_auth::handlers::login));

    let admin_routes = Router::new().route("/users", get(user_auth::handlers::list_users));

    let consumer_routes = Router::new()
        .route("/datasets", get(dataset::handlers::list_datasets))
        .route("/datasets/{dataset_id}", get(dataset::handlers::get_dataset))
        .route("/catalog", get(dataset::handlers::get_catalog));

    let provider_routes =
        Router::new().route("/datasets", post(dataset::handlers::publish_dataset));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/admin", admin_routes)
        .nest("/api/v1/consumer", consumer_routes)
        .nest("/api/v1/provider", provider_routes)
        .route(
            "/api/v1/consumers",
            post(consumer::handlers::create_consumer).get(consumer::handlers::list_consumers),
        )
        .route(
            "/api/v1/consumers/{consumer_id}",
            get(consumer::handlers::get_consumer),
        )
        .route(
            "/api/v1/consumers/{consumer_id}/payments",
            get(consumer::handlers::list_consumer_payments),
        )
        .route("/api/v1/payments", post(payment::handlers::create_payment))
        .route(
            "/api/v1/payments/{payment_id}",
            get(payment::handlers::get_payment),
        )
        .with_state(state)
        // Swagger UI is stateless, merged after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
