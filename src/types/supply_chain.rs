// ABOUTME: Vendor status, shipment tracking and supply chain alert payloads
// ABOUTME: Alerts carry alternative sourcing options ranked upstream

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorHealth {
    #[default]
    OnTrack,
    Delayed,
    AtRisk,
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorStatus {
    pub id: String,
    pub name: String,
    pub material: String,
    pub lead_time_days: f64,
    pub current_status: VendorHealth,
    pub port_of_origin: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentMilestone {
    pub description: String,
    pub timestamp: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTracking {
    pub id: String,
    pub vendor_id: String,
    pub tracking_id: String,
    pub eta: Option<String>,
    pub original_eta: Option<String>,
    pub delay_days: f64,
    pub delay_reason: Option<String>,
    pub status: String,
    #[serde(default)]
    pub milestones: Vec<ShipmentMilestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSourceOption {
    pub alt_vendor: String,
    pub cost_delta: f64,
    pub schedule_delta_days: f64,
    pub recommended: bool,
    pub notes: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainAlert {
    pub vendor_id: String,
    pub shipment_id: Option<String>,
    pub alert_type: String,
    pub severity: String,
    pub description: String,
    #[serde(default)]
    pub alternatives: Vec<AlternativeSourceOption>,
}
