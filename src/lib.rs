//! Data Marketplace - backend for trading EV datasets
//!
//! Providers list datasets, consumers browse them and pay for access.
//!
//! # Modules
//!
//! - [`user_auth`] - Registration, login and user listing
//! - [`dataset`] - Dataset catalogue and publishing
//! - [`consumer`] - Consumer billing profiles
//! - [`payment`] - Payments against consumer profiles
//! - [`persistence`] - Storage gateway (in-memory or PostgreSQL)
//! - [`gateway`] - HTTP router, shared state and OpenAPI docs

// Ambient
pub mod config;
pub mod db;
pub mod error;
pub mod logging;

// Storage
pub mod persistence;

// Domain
pub mod consumer;
pub mod dataset;
pub mod payment;
pub mod user_auth;

// HTTP
pub mod gateway;

pub use error::{MarketError, Result};
