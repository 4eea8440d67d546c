//! Route definitions and router setup
//!
//! Configures all API routes and middleware. Every report route is a GET
//! with optional query-string filters; see `params::ReportParams`.

mod balance;
mod campaign;
mod client;
mod company;
mod dashboard;
mod employee;
mod lease;
mod params;
mod pr_material;

use crate::config::Settings;
use crate::error::{not_found_error, AppError};
use crate::state::SharedState;
use axum::{
    error_handling::HandleErrorLayer,
    extract::State,
    http::{header, Method},
    routing::get,
    BoxError, Json, Router,
};
use std::time::Duration;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{warn, Level};

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    with_middleware(report_routes(), settings).with_state(state)
}

/// Wrap routes in CORS, tracing, request ids, compression and the request timeout
fn with_middleware(router: Router<SharedState>, settings: &Settings) -> Router<SharedState> {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    router.layer(middleware)
}

/// The route table
fn report_routes() -> Router<SharedState> {
    Router::new()
        // Health checks
        .route("/", get(root))
        .route("/health", get(health_check))

        // Balances
        .route("/get_balance", get(balance::get_balance))
        .route("/balances", get(balance::list_balances))

        // Campaigns
        .route("/campaigns_count", get(campaign::campaigns_count))
        .route("/campaigns_last", get(campaign::campaigns_last))

        // Companies and leases
        .route("/companies", get(company::list_companies))
        .route("/leases_max", get(lease::leases_max))
        .route("/leases_monthly", get(lease::leases_monthly))
        .route("/init_all", get(dashboard::init_all))

        // Clients
        .route("/clients/revenue", get(client::revenue))
        .route("/clients/top_commission_rate", get(client::top_commission_rate))
        .route("/clients/most_above_planned", get(client::most_above_planned))
        .route("/clients/top_commission_value", get(client::top_commission_value))

        // PR and people
        .route("/pr_materials_last", get(pr_material::pr_materials_last))
        .route("/employees_summary", get(employee::employees_summary))

        .fallback(endpoint_not_found)
}

/// Turns timeout and other middleware failures into the JSON error envelope
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Middleware(err.to_string())
    }
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Plain-text liveness check
async fn root() -> &'static str {
    "✅ API do Grupo 2025 está online!"
}

/// Health check endpoint, reports database reachability
async fn health_check(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let database = match state.db.ping().await {
        Ok(()) => "up",
        Err(e) => {
            warn!("Health check could not reach database: {}", e);
            "down"
        }
    };

    Json(serde_json::json!({
        "status": "ok",
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn endpoint_not_found() -> AppError {
    not_found_error("endpoint não encontrado")
}
