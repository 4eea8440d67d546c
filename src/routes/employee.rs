//! Employee route handlers

use crate::db::queries;
use crate::error::ApiResult;
use crate::models::{Employee, EmployeesSummary};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::info;

const EMPLOYEES_USAGE: &str = "Informe ?company=Nome";

/// Roster and headcount of one company
pub async fn employees_summary(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<EmployeesSummary>> {
    let company = params.require_company(EMPLOYEES_USAGE)?;

    let employees: Vec<Employee> = state.db.fetch_all(&queries::employees(company)).await?;
    info!("Listed {} employees for '{}'", employees.len(), company);

    Ok(Json(EmployeesSummary::new(company, employees)))
}
