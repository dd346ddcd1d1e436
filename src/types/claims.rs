// ABOUTME: Claims timeline, contractual notices and delay analysis payloads
// ABOUTME: Delay apportionment (excusable/compensable) is decided upstream

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimMilestone {
    pub date: String,
    pub event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub amount: f64,
    pub filed_date: String,
    pub status: String,
    #[serde(default)]
    pub milestones: Vec<ClaimMilestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticeRecord {
    pub id: String,
    pub notice_type: String,
    pub from_party: String,
    pub to_party: String,
    pub subject: String,
    pub sent_date: String,
    pub response_due: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelayEvent {
    pub id: String,
    pub description: String,
    pub delay_days: f64,
    pub excusable: bool,
    pub compensable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelayAnalysis {
    pub method: String,
    pub baseline_completion: String,
    pub projected_completion: String,
    pub total_delay_days: f64,
    pub excusable_days: f64,
    pub non_excusable_days: f64,
    pub compensable_days: f64,
    #[serde(default)]
    pub delay_events: Vec<DelayEvent>,
}
