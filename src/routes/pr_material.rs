//! PR material route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{ItemResponse, PrMaterial};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// Latest published PR material, optionally for one company
pub async fn pr_materials_last(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<ItemResponse<PrMaterial>>> {
    let item: Option<PrMaterial> = state
        .db
        .fetch_optional(&queries::last_pr_material(params.company()))
        .await?;

    Ok(Json(ItemResponse::new(item)))
}
