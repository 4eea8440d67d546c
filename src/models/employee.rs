//! Employee roster

use crate::db::FromRow;
use serde::Serialize;
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    #[serde(skip)]
    pub company_name: String,
    pub name: String,
    pub role: Option<String>,
    pub salary: Option<String>,
}

impl FromRow for Employee {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            company_name: row.try_get("company_name")?,
            name: row.try_get("name")?,
            role: row.try_get("role")?,
            salary: row.try_get("salary")?,
        })
    }
}

/// Roster of one company
#[derive(Debug, Serialize)]
pub struct EmployeesSummary {
    pub company: String,
    pub total_funcionarios: usize,
    pub funcionarios: Vec<Employee>,
}

impl EmployeesSummary {
    /// Uses the stored company name when any employee matched, else the requested one
    pub fn new(requested: &str, funcionarios: Vec<Employee>) -> Self {
        let company = funcionarios
            .first()
            .map(|e| e.company_name.clone())
            .unwrap_or_else(|| requested.to_string());

        Self {
            company,
            total_funcionarios: funcionarios.len(),
            funcionarios,
        }
    }
}
