//! Dataset catalogue

pub mod handlers;
pub mod models;
pub mod service;

pub use models::{Dataset, DatasetSummary, PublishDatasetRequest};
pub use service::DatasetService;
