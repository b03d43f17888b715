//! Consumer billing profiles

pub mod handlers;
pub mod models;
pub mod service;

pub use models::{CreateConsumerRequest, DataConsumer};
pub use service::ConsumerService;
