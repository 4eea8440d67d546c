//! Balance route handlers

use crate::db::queries;
use crate::error::{not_found_error, ApiResult};
use crate::models::{Balance, DataResponse};
use crate::routes::params::ReportParams;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::{debug, info};

const GET_BALANCE_USAGE: &str = "Informe ?empresa=Nome&ano=2024";

/// Balance rows of one company in one year; 404 when none exist
pub async fn get_balance(
    State(state): State<SharedState>,
    params: ReportParams,
) -> ApiResult<Json<DataResponse<Balance>>> {
    let (company, year) = params.require_company_and_year(GET_BALANCE_USAGE)?;
    debug!("Fetching balance for '{}' in {}", company, year);

    let balances: Vec<Balance> = state
        .db
        .fetch_all(&queries::balance_by_company_year(company, year))
        .await?;

    Ok(Json(balance_response(company, year, balances)?))
}

/// No rows is a 404, never an empty or placeholder balance
fn balance_response(
    company: &str,
    year: i32,
    balances: Vec<Balance>,
) -> ApiResult<DataResponse<Balance>> {
    if balances.is_empty() {
        return Err(not_found_error(format!(
            "Nenhum balanço encontrado para '{}' em {}",
            company, year
        )));
    }

    Ok(DataResponse::new(balances))
}

/// Every balance row
pub async fn list_balances(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Balance>>> {
    let balances: Vec<Balance> = state.db.fetch_all(&queries::all_balances()).await?;
    info!("Listed {} balances", balances.len());

    Ok(Json(DataResponse::new(balances)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_missing_balance_is_not_found_without_payload() {
        let err = balance_response("Acme", 2024, Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": "not_found",
                    "message": "Nenhum balanço encontrado para 'Acme' em 2024"
                }
            })
        );
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_found_balances_are_returned_as_is() {
        let balance = Balance {
            company_name: "Acme".to_string(),
            year: 2024,
            revenue: Some("1000.00".to_string()),
            ebitda: None,
            net_income: Some("-12.50".to_string()),
        };

        let response = balance_response("acme", 2024, vec![balance]).unwrap();
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "data": [{
                    "company_name": "Acme",
                    "year": 2024,
                    "revenue": "1000.00",
                    "ebitda": null,
                    "net_income": "-12.50"
                }]
            })
        );
    }
}
