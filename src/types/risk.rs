// ABOUTME: Risk register and heat map payloads
// ABOUTME: Scores arrive precomputed from the risk forecaster agent

use serde::{Deserialize, Serialize};

use super::DataSource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub probability: f64,
    pub impact_dollars: f64,
    pub impact_days: f64,
    pub safety_critical: bool,
    pub composite_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskEvent {
    pub id: String,
    pub project_id: String,
    pub category: String,
    pub description: String,
    pub risk_score: RiskScore,
    pub confidence: f64,
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    #[serde(default)]
    pub transparency_log: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskHeatMapCell {
    pub probability_range: String,
    pub impact_range: String,
    pub count: u32,
    #[serde(default)]
    pub risk_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskHeatMap {
    pub cells: Vec<RiskHeatMapCell>,
}

/// Body of POST /api/risks/assess
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentRequest {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe_days: Option<u32>,
}
