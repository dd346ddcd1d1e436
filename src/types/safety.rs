// ABOUTME: Safety metrics, OSHA 300 log, inspection readiness and contractor profiles
// ABOUTME: Rates (TRIR, DART, EMR) arrive precomputed

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyMetrics {
    pub trir: f64,
    pub dart: f64,
    pub emr: f64,
    pub days_since_recordable: u32,
    pub near_misses_ytd: u32,
    pub first_aid_ytd: u32,
    pub recordables_ytd: u32,
    pub man_hours_ytd: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Osha300Record {
    pub case_number: String,
    pub employee: String,
    pub date_of_injury: String,
    pub description: String,
    pub classification: String,
    pub days_away: u32,
    pub days_restricted: u32,
    pub body_part: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessCategory {
    pub name: String,
    pub score: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectionReadiness {
    pub overall_score: f64,
    #[serde(default)]
    pub categories: Vec<ReadinessCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractorSafetyProfile {
    pub contractor: String,
    pub emr: f64,
    pub trir: f64,
    pub prequalified: bool,
    pub incidents_ytd: u32,
    pub training_compliance_pct: f64,
}
