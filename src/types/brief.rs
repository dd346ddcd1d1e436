// ABOUTME: Orchestrator daily brief - top threats, quality gaps and one acceleration idea

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatSummary {
    pub rank: u32,
    pub title: String,
    pub agent_source: String,
    pub impact: String,
    pub confidence: f64,
    pub action_required: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityGap {
    pub rank: u32,
    pub title: String,
    pub agent_source: String,
    pub severity: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationOpportunity {
    pub title: String,
    pub agent_source: String,
    pub potential_savings_days: f64,
    pub cost: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBrief {
    pub brief_date: String,
    pub generated_at: String,
    #[serde(default)]
    pub top_threats: Vec<ThreatSummary>,
    #[serde(default)]
    pub quality_gaps: Vec<QualityGap>,
    pub acceleration: Option<AccelerationOpportunity>,
    pub full_text: String,
}
