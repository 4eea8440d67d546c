//! Equipment lease route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{DataResponse, ItemResponse, LeaseMonthly};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

const LEASES_MAX_USAGE: &str = "Informe ?year=2024 (opcional: &company=Nome)";

/// Lease line with the highest amount paid in the requested year
pub async fn leases_max(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<LeaseMonthly>>> {
    let year = params.require_year(LEASES_MAX_USAGE)?;
    let company = params.company();
    debug!("Fetching max lease for {} (company: {:?})", year, company);

    let item: Option<LeaseMonthly> = state
        .db
        .fetch_optional(&queries::lease_max(year, company))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}

/// Monthly lease lines filtered by year and/or company
pub async fn leases_monthly(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<DataResponse<LeaseMonthly>>> {
    let year = params.year()?;
    let leases: Vec<LeaseMonthly> = state
        .db
        .fetch_all(&queries::leases_monthly(year, params.company()))
        .await?;

    debug!("Fetched {} lease lines", leases.len());
    Ok(Json(DataResponse::new(leases)))
}
