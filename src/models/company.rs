//! Company rows

use crate::db::FromRow;
use serde::Serialize;
use tokio_postgres::Row;

/// A group company. Keys mirror the `companies` columns.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: i32,
    pub nome: String,
    pub area: Option<String>,
    pub descricao: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            nome: row.try_get("nome")?,
            area: row.try_get("area")?,
            descricao: row.try_get("descricao")?,
        })
    }
}
