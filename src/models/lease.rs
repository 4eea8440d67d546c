//! Monthly equipment lease records

use crate::db::FromRow;
use serde::Serialize;
use tokio_postgres::Row;

/// One (company, year, month) lease line
#[derive(Debug, Clone, Serialize)]
pub struct LeaseMonthly {
    pub company_name: String,
    pub year: i32,
    pub month: i32,
    pub amount_paid: Option<String>,
    pub machines_count: Option<i32>,
}

impl FromRow for LeaseMonthly {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            company_name: row.try_get("company_name")?,
            year: row.try_get("year")?,
            month: row.try_get("month")?,
            amount_paid: row.try_get("amount_paid")?,
            machines_count: row.try_get("machines_count")?,
        })
    }
}
