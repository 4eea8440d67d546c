//! Client performance route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{
    ClientAbovePlanned, ClientPerformance, ClientRevenue, DataResponse, ItemResponse,
};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

const COMPANY_USAGE: &str = "Informe ?company=Nome";
const COMPANY_YEAR_USAGE: &str = "Informe ?company=Nome (opcional: &year=2024)";

/// Realized revenue per year
pub async fn revenue(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<DataResponse<ClientRevenue>>> {
    let company = params.require_company(COMPANY_YEAR_USAGE)?;
    let year = params.year()?;
    debug!("Client revenue for '{}' (year: {:?})", company, year);

    let rows: Vec<ClientRevenue> = state
        .db
        .fetch_all(&queries::client_revenue(company, year))
        .await?;

    Ok(Json(DataResponse::new(rows)))
}

/// Client with the highest commission rate
pub async fn top_commission_rate(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<ClientPerformance>>> {
    let company = params.require_company(COMPANY_USAGE)?;

    let item: Option<ClientPerformance> = state
        .db
        .fetch_optional(&queries::top_commission_rate(company))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}

/// Client whose realized revenue most exceeded the plan
pub async fn most_above_planned(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<ClientAbovePlanned>>> {
    let company = params.require_company(COMPANY_YEAR_USAGE)?;
    let year = params.year()?;

    let item: Option<ClientAbovePlanned> = state
        .db
        .fetch_optional(&queries::most_above_planned(company, year))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}

/// Client with the highest commission value
pub async fn top_commission_value(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<ClientPerformance>>> {
    let company = params.require_company(COMPANY_YEAR_USAGE)?;
    let year = params.year()?;

    let item: Option<ClientPerformance> = state
        .db
        .fetch_optional(&queries::top_commission_value(company, year))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}
