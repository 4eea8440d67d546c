//! Client performance per company and year

use crate::db::FromRow;
use serde::Serialize;
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct ClientPerformance {
    pub company_name: String,
    pub client_name: String,
    pub year: i32,
    pub planned: Option<String>,
    pub realized: Option<String>,
    pub commission_rate: Option<String>,
    pub commission_value: Option<String>,
}

impl FromRow for ClientPerformance {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            company_name: row.try_get("company_name")?,
            client_name: row.try_get("client_name")?,
            year: row.try_get("year")?,
            planned: row.try_get("planned")?,
            realized: row.try_get("realized")?,
            commission_rate: row.try_get("commission_rate")?,
            commission_value: row.try_get("commission_value")?,
        })
    }
}

/// A client row plus how far `realized` exceeded `planned`
#[derive(Debug, Clone, Serialize)]
pub struct ClientAbovePlanned {
    #[serde(flatten)]
    pub client: ClientPerformance,
    pub above_planned: Option<String>,
}

impl FromRow for ClientAbovePlanned {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            client: ClientPerformance::from_row(row)?,
            above_planned: row.try_get("above_planned")?,
        })
    }
}

/// Realized revenue summed per year
#[derive(Debug, Clone, Serialize)]
pub struct ClientRevenue {
    pub year: i32,
    pub faturamento: Option<String>,
}

impl FromRow for ClientRevenue {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            year: row.try_get("year")?,
            faturamento: row.try_get("faturamento")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_above_planned_is_flattened_into_client_row() {
        let row = ClientAbovePlanned {
            client: ClientPerformance {
                company_name: "Grupo WE".to_string(),
                client_name: "Banco X".to_string(),
                year: 2024,
                planned: Some("100.00".to_string()),
                realized: Some("150.50".to_string()),
                commission_rate: Some("0.05".to_string()),
                commission_value: Some("7.53".to_string()),
            },
            above_planned: Some("50.50".to_string()),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["client_name"], json!("Banco X"));
        assert_eq!(value["above_planned"], json!("50.50"));
        assert!(value.get("client").is_none());
    }
}
