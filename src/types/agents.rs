// ABOUTME: Agent status and approval request payloads
// ABOUTME: Approvals carry the agent's transparency log and projected impact

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRunState {
    #[default]
    Idle,
    Running,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub name: String,
    pub status: AgentRunState,
    pub last_run: String,
    pub runs_today: u32,
    pub avg_duration_seconds: f64,
    pub errors_today: u32,
}

/// Where an agent got a piece of evidence from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub source_type: String,
    pub source_name: String,
    pub retrieved_at: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub cost_delta: f64,
    pub schedule_delta_days: f64,
    pub risk_change: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub id: String,
    pub agent_name: String,
    pub action_type: String,
    pub title: String,
    pub description: String,
    pub confidence: f64,
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    #[serde(default)]
    pub transparency_log: Vec<String>,
    pub impact: ImpactSummary,
    pub status: ApprovalStatus,
    pub pm_notes: Option<String>,
}

impl ApprovalRequest {
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

/// Body of the approve/reject actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    pub notes: String,
}
