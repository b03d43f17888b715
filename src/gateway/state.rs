use std::sync::Arc;

use crate::consumer::ConsumerService;
use crate::dataset::DatasetService;
use crate::db::Database;
use crate::payment::PaymentService;
use crate::persistence::Repositories;
use crate::user_auth::{PasswordScheme, UserService};

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub datasets: Arc<DatasetService>,
    pub consumers: Arc<ConsumerService>,
    pub payments: Arc<PaymentService>,
    /// PostgreSQL pool, pinged by the health check. `None` in memory mode.
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        repos: Repositories,
        pg_db: Option<Arc<Database>>,
        password_scheme: PasswordScheme,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(repos.users, password_scheme)),
            datasets: Arc::new(DatasetService::new(repos.datasets)),
            consumers: Arc::new(ConsumerService::new(repos.consumers.clone())),
            payments: Arc::new(PaymentService::new(repos.consumers, repos.payments)),
            pg_db,
        }
    }

    /// State backed by fresh in-memory repositories
    pub fn in_memory(password_scheme: PasswordScheme) -> Self {
        Self::new(Repositories::in_memory(), None, password_scheme)
    }
}
