//! Dashboard bootstrap route

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{Company, InitAllResponse, LeaseMonthly};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::info;

/// Companies plus the 2024 and 2025 lease lines, fetched concurrently.
/// Any failing query fails the whole response.
pub async fn init_all(State(state): State<SharedState>) -> ApiResult<Json<InitAllResponse>> {
    let companies_query = queries::companies();
    let leases_2024_query = queries::leases_monthly(Some(2024), None);
    let leases_2025_query = queries::leases_monthly(Some(2025), None);

    let (companies, leases_2024, leases_2025) = tokio::try_join!(
        state.db.fetch_all::<Company>(&companies_query),
        state.db.fetch_all::<LeaseMonthly>(&leases_2024_query),
        state.db.fetch_all::<LeaseMonthly>(&leases_2025_query),
    )?;

    info!(
        "init_all: {} companies, {} leases (2024), {} leases (2025)",
        companies.len(),
        leases_2024.len(),
        leases_2025.len()
    );

    Ok(Json(InitAllResponse {
        companies,
        leases_2024,
        leases_2025,
    }))
}
