//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::consumer::{CreateConsumerRequest, DataConsumer};
use crate::dataset::{Dataset, DatasetSummary, PublishDatasetRequest};
use crate::gateway::handlers::HealthResponse;
use crate::payment::{CreatePaymentRequest, Payment, PaymentStatus};
use crate::user_auth::{LoginRequest, RegisterRequest, Role, User, UserStatus};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Marketplace API",
        version = "1.0.0",
        description = "Marketplace where providers list EV datasets and consumers pay for them.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        // Users
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::user_auth::handlers::list_users,
        // Datasets
        crate::dataset::handlers::list_datasets,
        crate::dataset::handlers::get_dataset,
        crate::dataset::handlers::get_catalog,
        crate::dataset::handlers::publish_dataset,
        // Consumers
        crate::consumer::handlers::create_consumer,
        crate::consumer::handlers::list_consumers,
        crate::consumer::handlers::get_consumer,
        crate::consumer::handlers::list_consumer_payments,
        // Payments
        crate::payment::handlers::create_payment,
        crate::payment::handlers::get_payment,
    ),
    components(
        schemas(
            HealthResponse,
            User,
            Role,
            UserStatus,
            RegisterRequest,
            LoginRequest,
            Dataset,
            DatasetSummary,
            PublishDatasetRequest,
            DataConsumer,
            CreateConsumerRequest,
            Payment,
            PaymentStatus,
            CreatePaymentRequest,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Admin", description = "Administrative listings"),
        (name = "Datasets", description = "Dataset catalogue and publishing"),
        (name = "Consumers", description = "Consumer billing profiles"),
        (name = "Payments", description = "Payments for datasets"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
