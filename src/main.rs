//! Process entry point: config, logging, pool, schema, gateway.

use std::sync::Arc;

use money_transfer::config::AppConfig;
use money_transfer::db::{Database, schema};
use money_transfer::gateway::{self, state::AppState};
use money_transfer::logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(env = %env, "starting money_transfer");

    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    schema::init_schema(db.pool()).await?;

    let state = Arc::new(AppState { db });
    gateway::serve(&config.gateway, state).await
}
