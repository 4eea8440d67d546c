//! Yearly balance sheet figures
//!
//! Monetary values are carried as the database's exact decimal text and
//! serialized as JSON strings, never as floats.

use crate::db::FromRow;
use serde::Serialize;
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct Balance {
    pub company_name: String,
    pub year: i32,
    pub revenue: Option<String>,
    pub ebitda: Option<String>,
    pub net_income: Option<String>,
}

impl FromRow for Balance {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            company_name: row.try_get("company_name")?,
            year: row.try_get("year")?,
            revenue: row.try_get("revenue")?,
            ebitda: row.try_get("ebitda")?,
            net_income: row.try_get("net_income")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_money_survives_json_round_trip_exactly() {
        let stored = "123456789012345678901234.567890123456";
        let balance = Balance {
            company_name: "Grupo WE".to_string(),
            year: 2024,
            revenue: Some(stored.to_string()),
            ebitda: None,
            net_income: Some("-0.01".to_string()),
        };

        let text = serde_json::to_string(&balance).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["revenue"].as_str(), Some(stored));
        assert_eq!(parsed["net_income"].as_str(), Some("-0.01"));
        assert!(parsed["ebitda"].is_null());
    }
}
