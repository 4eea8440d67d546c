//! Data models and DTOs (Data Transfer Objects)
//!
//! Row types read from the reporting schema and the response envelopes
//! wrapped around them.

pub mod balance;
pub mod campaign;
pub mod client;
pub mod company;
pub mod employee;
pub mod lease;
pub mod pr_material;

// Re-export commonly used types
pub use balance::*;
pub use campaign::*;
pub use client::*;
pub use company::*;
pub use employee::*;
pub use lease::*;
pub use pr_material::*;

use serde::Serialize;

/// Collection envelope: `{ "data": [...] }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: Vec<T>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Single optional lookup envelope: `{ "item": {...} | null }`
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub item: Option<T>,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(item: Option<T>) -> Self {
        Self { item }
    }
}

/// Count envelope: `{ "total": n }`
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i64,
}

/// Dashboard bootstrap payload
#[derive(Debug, Serialize)]
pub struct InitAllResponse {
    pub companies: Vec<Company>,
    pub leases_2024: Vec<LeaseMonthly>,
    pub leases_2025: Vec<LeaseMonthly>,
}
