//! Supplier compliance monitoring: a typed client for the remote compliance API and
//! the list, detail, and insights views rendered from it.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod telemetry;
pub mod views;

pub use client::{ApiError, ComplianceApiClient};
pub use domain::{
    ComplianceRecord, ComplianceSubmission, InsightsResult, MetricResult, Supplier, SupplierId,
};
pub use routes::Route;
