//! Data Marketplace server
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌────────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Services │───▶│  Repositories  │
//! │  (YAML)  │    │  (axum)  │    │          │    │ (memory / PG)  │
//! └──────────┘    └──────────┘    └──────────┘    └────────────────┘
//! ```
//!
//! Usage: `data_marketplace [--env dev|prod] [--port 8080]`

use anyhow::Context;
use std::sync::Arc;

use data_marketplace::config::AppConfig;
use data_marketplace::db::Database;
use data_marketplace::gateway::{self, state::AppState};
use data_marketplace::logging::init_logging;
use data_marketplace::persistence::Repositories;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        config.server.port = port;
    }
    let _log_guard = init_logging(&config);

    tracing::info!(
        "Starting Data Marketplace ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    let (repos, pg_db) = match config.postgres_url {
        Some(ref url) => {
            let db = Database::connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            let repos = Repositories::postgres(db.pool().clone());
            (repos, Some(Arc::new(db)))
        }
        None => {
            tracing::warn!("postgres_url not set, using in-memory storage");
            (Repositories::in_memory(), None)
        }
    };

    let state = Arc::new(AppState::new(repos, pg_db, config.password_scheme));
    gateway::run_server(&config.bind_addr(), state).await
}
