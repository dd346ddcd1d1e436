// ABOUTME: Budget, earned value, cash flow and change order payloads
// ABOUTME: EVM indices are computed by the financial agent, never here

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub project_id: String,
    pub total_budget: f64,
    pub spent_to_date: f64,
    pub committed: f64,
    pub forecast_at_completion: f64,
    pub contingency_remaining: f64,
    pub variance_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarnedValue {
    pub snapshot_date: String,
    pub bcws: f64,
    pub bcwp: f64,
    pub acwp: f64,
    pub cpi: f64,
    pub spi: f64,
    pub eac: f64,
    pub etc: f64,
    pub vac: f64,
    pub tcpi: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub period: String,
    pub planned_draw: f64,
    pub actual_draw: f64,
    pub cumulative_planned: f64,
    pub cumulative_actual: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOrderStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Executed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeOrder {
    pub id: String,
    pub co_number: String,
    pub description: String,
    pub cost_impact: f64,
    pub schedule_impact_days: f64,
    pub status: ChangeOrderStatus,
    pub submitted_date: Option<String>,
    pub approved_date: Option<String>,
}
