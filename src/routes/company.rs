//! Company route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{Company, DataResponse};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::info;

/// All companies ordered by id
pub async fn list_companies(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Company>>> {
    let companies: Vec<Company> = state.db.fetch_all(&queries::companies()).await?;
    info!("Listed {} companies", companies.len());

    Ok(Json(DataResponse::new(companies)))
}
