//! Grupo 2025 Reporting API
//!
//! Read-only JSON endpoints over company balances, ad campaigns, equipment
//! leases, client performance, PR materials and employee rosters.
//!
//! Every route validates its query-string filters, runs one parameterized
//! statement (or a fixed concurrent batch) against PostgreSQL and returns
//! the rows as JSON.

mod config;
mod db;
mod error;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::db::Database;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Grupo 2025 Reporting API...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Open the database pool and verify it before accepting traffic
    let db = Database::new(&settings.database)?;
    if let Err(e) = db.ping().await {
        error!("❌ FATAL: Database is not reachable: {}", e);
        error!("DATABASE_URL must be set in .env and database must be accessible");
        return Err(e.into());
    }
    info!(
        "✅ Database pool ready (max {} connections, ssl {:?})",
        settings.database.max_pool_size, settings.database.ssl_mode
    );

    let state = Arc::new(AppState::new(db.clone()));

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   GET  /                              - Liveness text");
    info!("   GET  /health                        - Health incl. database");
    info!("   GET  /get_balance?empresa=&ano=     - Balance of a company/year");
    info!("   GET  /balances                      - All balances");
    info!("   GET  /campaigns_count[?company=]    - Campaign count");
    info!("   GET  /campaigns_last[?company=]     - Latest campaign");
    info!("   GET  /companies                     - All companies");
    info!("   GET  /leases_max?year=[&company=]   - Largest lease payment of a year");
    info!("   GET  /leases_monthly[?year=&company=] - Monthly leases");
    info!("   GET  /init_all                      - Dashboard bootstrap");
    info!("   GET  /clients/revenue?company=[&year=]");
    info!("   GET  /clients/top_commission_rate?company=");
    info!("   GET  /clients/most_above_planned?company=[&year=]");
    info!("   GET  /clients/top_commission_value?company=[&year=]");
    info!("   GET  /pr_materials_last[?company=]  - Latest PR material");
    info!("   GET  /employees_summary?company=    - Employee roster");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close();
    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reporting_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
