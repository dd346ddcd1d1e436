// ABOUTME: Integrated systems testing, punch list and turnover package payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IstSequence {
    pub id: String,
    pub system: String,
    pub status: String,
    pub progress_pct: f64,
    pub tests_passed: u32,
    pub tests_total: u32,
    pub next_test: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PunchItem {
    pub id: String,
    pub description: String,
    pub system: String,
    pub location: String,
    pub severity: String,
    pub assigned_to: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnoverPackage {
    pub id: String,
    pub system: String,
    pub documents_complete: u32,
    pub documents_required: u32,
    pub progress_pct: f64,
    pub status: String,
    #[serde(default)]
    pub missing: Vec<String>,
}
