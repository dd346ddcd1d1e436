// ABOUTME: Crew status, productivity trend and certification payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewStatus {
    pub trade: String,
    pub headcount: u32,
    pub planned_production: f64,
    pub actual_production: f64,
    pub productivity_pct: f64,
    pub location: Option<String>,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductivityTrend {
    Improving,
    #[default]
    Stable,
    Declining,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductivityMetric {
    pub trade: String,
    pub period: String,
    pub planned_units: f64,
    pub actual_units: f64,
    pub productivity_index: f64,
    pub trend: ProductivityTrend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationState {
    #[default]
    Valid,
    ExpiringSoon,
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub worker_id: String,
    pub worker_name: String,
    pub cert_type: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub status: CertificationState,
}
