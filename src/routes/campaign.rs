//! Campaign route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{Campaign, CampaignCount, ItemResponse, TotalResponse};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

/// Number of campaigns, optionally for one company
pub async fn campaigns_count(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<TotalResponse>> {
    let company = params.company();
    debug!("Counting campaigns (company: {:?})", company);

    let count: Option<CampaignCount> = state
        .db
        .fetch_optional(&queries::campaigns_count(company))
        .await?;

    Ok(Json(TotalResponse {
        total: count.map(|c| c.0).unwrap_or(0),
    }))
}

/// Most recently aired campaign, optionally for one company
pub async fn campaigns_last(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<Campaign>>> {
    let item: Option<Campaign> = state
        .db
        .fetch_optional(&queries::last_campaign(params.company()))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}
