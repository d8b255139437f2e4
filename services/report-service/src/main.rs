mod app;
mod config;
mod error;
mod handlers;
mod insert;
mod models;
mod outcome;
mod schema;
mod state;
mod validation;

use fontstats_common::{bind_listener, init_tracing, shutdown_signal};

use crate::config::ServiceConfig;
use crate::insert::InsertClient;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    let _guards = init_tracing("report-service");

    // Fail fast: nothing is served without both secrets.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };
    let inserts = match InsertClient::new(&config.supabase_url, &config.service_role_key) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "http client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = inserts.endpoint(), "forwarding reports");

    let app = app::build_router(AppState::new(inserts));
    let listener = match bind_listener(config.port).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, port = config.port, "bind listener failed");
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}
