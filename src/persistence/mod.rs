//! Storage gateway
//!
//! - `repository`: the `Repository<E>` contract and entity-specific lookups
//! - `memory`: in-process backend
//! - `postgres`: sqlx/PostgreSQL backend

pub mod memory;
pub mod postgres;
pub mod repository;

use sqlx::PgPool;
use std::sync::Arc;

use crate::consumer::DataConsumer;
use crate::dataset::Dataset;
use crate::payment::Payment;
use crate::user_auth::User;

pub use memory::MemoryRepository;
pub use postgres::{PgConsumerRepository, PgDatasetRepository, PgPaymentRepository, PgUserRepository};
pub use repository::{Entity, NEW_ID, PaymentRepository, Repository, UserRepository};

/// One repository per entity kind, shared by the services
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub datasets: Arc<dyn Repository<Dataset>>,
    pub consumers: Arc<dyn Repository<DataConsumer>>,
    pub payments: Arc<dyn PaymentRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<User>::new()),
            datasets: Arc::new(MemoryRepository::<Dataset>::new()),
            consumers: Arc::new(MemoryRepository::<DataConsumer>::new()),
            payments: Arc::new(MemoryRepository::<Payment>::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            datasets: Arc::new(PgDatasetRepository::new(pool.clone())),
            consumers: Arc::new(PgConsumerRepository::new(pool.clone())),
            payments: Arc::new(PgPaymentRepository::new(pool)),
        }
    }
}
