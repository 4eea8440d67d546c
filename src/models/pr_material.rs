//! Press-relations material

use crate::db::FromRow;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct PrMaterial {
    pub id: i32,
    pub company_name: String,
    pub title: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub generated_value: Option<String>,
    pub content: Option<String>,
}

impl FromRow for PrMaterial {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            company_name: row.try_get("company_name")?,
            title: row.try_get("title")?,
            publish_date: row.try_get("publish_date")?,
            created_at: row.try_get("created_at")?,
            generated_value: row.try_get("generated_value")?,
            content: row.try_get("content")?,
        })
    }
}
