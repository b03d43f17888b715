//! Repository traits for data access abstraction
//!
//! This module provides traits that abstract data access, enabling:
//! - Testability through the in-memory backend
//! - Swapping PostgreSQL in without touching the services
//! - Clean separation between business logic and infrastructure

use async_trait::async_trait;

use crate::error::Result;
use crate::payment::Payment;
use crate::user_auth::User;

/// Identifier carried by a record that has never been saved
pub const NEW_ID: i64 = 0;

/// A persisted record with a storage-assigned identifier
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    /// Called once by the repository when the record is first inserted
    fn assign_id(&mut self, id: i64);
}

// ============================================================================
// Generic Repository
// ============================================================================

/// Key-based lookup and persistence, one instance per entity kind
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Record with the given id. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<E>>;

    /// Every record, ascending id
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Insert when `entity.id() == NEW_ID` (assigning a fresh id),
    /// otherwise overwrite the record with that id.
    async fn save(&self, entity: E) -> Result<E>;
}

// ============================================================================
// Entity-specific lookups
// ============================================================================

#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Exact email match. Emails are not unique; the lowest id wins.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
pub trait PaymentRepository: Repository<Payment> {
    /// Payments of one consumer, ascending id
    async fn find_by_consumer(&self, consumer_id: i64) -> Result<Vec<Payment>>;
}
