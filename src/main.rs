//! Ledger Gateway - entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Ledger  │───▶│ Gateway  │
//! │  (YAML)  │    │ (PG/mem) │    │  (HTTP)  │
//! └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `ledger_gateway [--env dev] [--port 3333]`

use std::sync::Arc;

use anyhow::Context;

use ledger_gateway::config::AppConfig;
use ledger_gateway::db::Database;
use ledger_gateway::ledger::{LedgerStore, MemoryLedger, PgLedger};

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
    let app_config = AppConfig::load(&env)?;
    let _log_guard = ledger_gateway::logging::init_logging(&app_config);

    tracing::info!("Starting Ledger Gateway in {} mode", env);

    let store: Arc<dyn LedgerStore> = match app_config.postgres_url.as_deref() {
        Some(url) => {
            let db = Database::connect(url, &app_config.database)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.init_schema()
                .await
                .context("Failed to create accounts table")?;
            Arc::new(PgLedger::new(db.pool().clone()))
        }
        None => {
            tracing::warn!("postgres_url not configured, using in-memory ledger (not persisted)");
            Arc::new(MemoryLedger::new())
        }
    };

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    ledger_gateway::gateway::run_server(&app_config.gateway.host, port, store)
        .await
        .context("Gateway server failed")?;

    tracing::info!("Ledger Gateway stopped");
    Ok(())
}
