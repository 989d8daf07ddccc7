use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Server-assigned supplier identifier used for routing and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub i64);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SupplierId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(SupplierId)
    }
}

impl From<i64> for SupplierId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Vendor tracked for compliance auditing.
///
/// The list endpoint omits `compliance_records`, so it defaults to empty. Record order
/// is whatever the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub compliance_score: Option<f64>,
    #[serde(default)]
    pub last_audit: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_terms: Option<serde_json::Value>,
    #[serde(default)]
    pub compliance_records: Vec<ComplianceRecord>,
}

impl Supplier {
    pub fn detail_path(&self) -> String {
        format!("/suppliers/{}", self.id)
    }

    pub fn score_label(&self) -> String {
        self.compliance_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    }

    pub fn last_audit_label(&self) -> String {
        self.last_audit
            .map(|date| date.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    }
}

/// One historical audit entry tied to a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub id: i64,
    pub metric: String,
    pub result: MetricResult,
    pub date_recorded: NaiveDate,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
}

impl ComplianceRecord {
    pub fn headline(&self) -> String {
        format!("Metric: {}", self.metric)
    }

    pub fn summary(&self) -> String {
        format!(
            "Result: {}, Date: {}, Status: {}",
            self.result, self.date_recorded, self.status
        )
    }
}

/// Audit outcome; the server stores numbers but older records carry labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricResult {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricResult::Number(value) => write!(f, "{value}"),
            MetricResult::Text(value) => f.write_str(value),
        }
    }
}

/// AI-generated summary of a supplier's compliance posture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<SupplierId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub insights: String,
}

/// Payload accepted by the compliance-check endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSubmission {
    pub supplier_id: SupplierId,
    pub metric: String,
    pub result: f64,
    pub date_recorded: NaiveDate,
}
