//! Advertising campaigns

use crate::db::FromRow;
use chrono::NaiveDate;
use serde::Serialize;
use tokio_postgres::Row;

/// A campaign joined with its company's name
#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub id: i32,
    pub company_name: String,
    pub titulo: Option<String>,
    pub data_veiculacao: Option<NaiveDate>,
    pub valor_investido: Option<String>,
    pub retorno: Option<String>,
}

impl FromRow for Campaign {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            company_name: row.try_get("company_name")?,
            titulo: row.try_get("titulo")?,
            data_veiculacao: row.try_get("data_veiculacao")?,
            valor_investido: row.try_get("valor_investido")?,
            retorno: row.try_get("retorno")?,
        })
    }
}

/// Result of the campaign count query
pub struct CampaignCount(pub i64);

impl FromRow for CampaignCount {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self(row.try_get("total")?))
    }
}
