// ABOUTME: Critical path, float report and Monte Carlo schedule payloads
// ABOUTME: All schedule math happens upstream; these are display shapes only

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub external_id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_float: f64,
    pub is_critical: bool,
    pub tier_critical: bool,
    #[serde(default)]
    pub predecessors: Vec<String>,
    #[serde(default)]
    pub successors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalPath {
    pub activities: Vec<Activity>,
    pub total_duration_days: f64,
    #[serde(default)]
    pub float_summary: BTreeMap<String, f64>,
}

impl CriticalPath {
    pub fn critical_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|a| a.is_critical)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDelta {
    pub baseline_end: String,
    pub projected_end: String,
    pub delta_days: f64,
    #[serde(default)]
    pub float_consumed: BTreeMap<String, f64>,
    #[serde(default)]
    pub affected_activities: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatReport {
    pub activity_id: String,
    pub activity_name: String,
    pub total_float: f64,
    pub free_float: f64,
    pub status: FloatStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub month: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub iterations: u32,
    pub p50_completion: String,
    pub p80_completion: String,
    pub p95_completion: String,
    pub confidence: f64,
    #[serde(default)]
    pub float_consumed: BTreeMap<String, f64>,
    #[serde(default)]
    pub histogram: Vec<HistogramBucket>,
    pub run_at: String,
}

/// Body of POST /api/schedule/simulate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
}
