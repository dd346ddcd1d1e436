// ABOUTME: Crane schedule, staging zone and site headcount payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraneSlot {
    pub start: String,
    pub end: String,
    pub trade: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraneScheduleEntry {
    pub id: String,
    pub crane_id: String,
    pub date: String,
    #[serde(default)]
    pub time_slots: Vec<CraneSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagingPlan {
    pub id: String,
    pub zone: String,
    pub capacity_pct: f64,
    #[serde(default)]
    pub current_materials: Vec<String>,
    pub reserved_until: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeCount {
    pub trade: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteHeadcount {
    pub date: String,
    pub total: u32,
    #[serde(default)]
    pub by_trade: Vec<TradeCount>,
}
