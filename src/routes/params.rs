//! Query-string filters shared by every report route

use crate::error::{missing_parameter, AppError};
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

/// `company`/`empresa` and `year`/`ano`, all optional at extraction time.
/// Blank values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    company: Option<String>,
    empresa: Option<String>,
    year: Option<String>,
    ano: Option<String>,
}

impl ReportParams {
    pub fn company(&self) -> Option<&str> {
        non_blank(&self.company).or_else(|| non_blank(&self.empresa))
    }

    /// Parsed year, `None` when not supplied
    pub fn year(&self) -> Result<Option<i32>, AppError> {
        self.raw_year().map(parse_year).transpose()
    }

    pub fn require_company(&self, usage: &str) -> Result<&str, AppError> {
        self.company().ok_or_else(|| missing_parameter(usage))
    }

    pub fn require_year(&self, usage: &str) -> Result<i32, AppError> {
        self.raw_year()
            .ok_or_else(|| missing_parameter(usage))
            .and_then(parse_year)
    }

    /// Both keys must be present before either is validated
    pub fn require_company_and_year(&self, usage: &str) -> Result<(&str, i32), AppError> {
        match (self.company(), self.raw_year()) {
            (Some(company), Some(year)) => Ok((company, parse_year(year)?)),
            _ => Err(missing_parameter(usage)),
        }
    }

    fn raw_year(&self) -> Option<&str> {
        non_blank(&self.year).or_else(|| non_blank(&self.ano))
    }
}

impl<S> FromRequestParts<S> for ReportParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ReportParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::InvalidParameter(rejection.body_text()))?;
        Ok(params)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_year(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| {
        AppError::InvalidParameter(format!("Ano inválido: '{raw}' (esperado ex.: 2024)"))
    })
}
