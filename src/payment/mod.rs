//! Payments made by data consumers

pub mod handlers;
pub mod models;
pub mod service;

pub use models::{CreatePaymentRequest, Payment, PaymentStatus};
pub use service::PaymentService;
