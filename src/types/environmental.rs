// ABOUTME: Environmental permits and LEED credit tracking

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermitStatus {
    pub id: String,
    pub permit_type: String,
    pub description: String,
    pub status: String,
    pub expiry_date: String,
    pub inspector: String,
    pub last_inspection: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeedCredit {
    pub name: String,
    pub earned: f64,
    pub possible: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeedTracking {
    pub target_level: String,
    pub current_points: f64,
    pub target_points: f64,
    #[serde(default)]
    pub categories: Vec<LeedCredit>,
}
