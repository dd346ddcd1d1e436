// ABOUTME: BIM compliance checks and deviation tickets
// ABOUTME: Severity and status are closed sets on checks, free text on tickets

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSeverity {
    #[default]
    Info,
    Minor,
    Major,
    Critical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Accepted,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub id: String,
    pub project_id: String,
    pub check_type: String,
    pub bim_element_id: Option<String>,
    pub measured_value: Option<String>,
    pub required_value: Option<String>,
    pub deviation: Option<f64>,
    pub severity: CheckSeverity,
    pub status: CheckStatus,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Response of POST /api/compliance/check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRun {
    pub checks: Vec<ComplianceCheck>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviationTicket {
    pub id: String,
    pub compliance_check_id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub bim_overlay_url: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub status: String,
}
