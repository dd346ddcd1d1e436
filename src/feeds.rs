// ABOUTME: Registry of read-only dashboard feeds that can be watched by name
// ABOUTME: Each feed is fetched through its typed endpoint and rendered as JSON

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use sitepulse_core::{fetcher, Fetcher};
use std::collections::HashSet;

use crate::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Feed {
    Agents,
    Approvals,
    Risks,
    Heatmap,
    CriticalPath,
    FloatReport,
    ComplianceTickets,
    Vendors,
    SupplyAlerts,
    Shipments,
    Budget,
    Evm,
    CashFlow,
    ChangeOrders,
    Crews,
    Productivity,
    Certifications,
    DailyBrief,
    SafetyMetrics,
    #[value(name = "osha300")]
    Osha300,
    Readiness,
    Contractors,
    Ist,
    Punch,
    Turnover,
    Permits,
    Leed,
    ClaimTimeline,
    Notices,
    DelayAnalysis,
    Crane,
    Staging,
    Headcount,
}

impl Feed {
    /// Kebab-case name used on the command line
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    pub fn all() -> &'static [Feed] {
        Feed::value_variants()
    }

    /// Drop repeated feeds, keeping the first occurrence of each in order
    pub fn unique(feeds: impl IntoIterator<Item = Feed>) -> Vec<Feed> {
        let mut seen = HashSet::new();
        feeds.into_iter().filter(|feed| seen.insert(*feed)).collect()
    }

    /// The dashboard area this feed belongs to
    pub fn area(self) -> &'static str {
        match self {
            Feed::Agents | Feed::Approvals | Feed::DailyBrief => "overview",
            Feed::Risks | Feed::Heatmap => "risks",
            Feed::CriticalPath | Feed::FloatReport => "schedule",
            Feed::ComplianceTickets => "compliance",
            Feed::Vendors | Feed::SupplyAlerts | Feed::Shipments => "supply-chain",
            Feed::Budget | Feed::Evm | Feed::CashFlow | Feed::ChangeOrders => "financial",
            Feed::Crews | Feed::Productivity | Feed::Certifications => "workforce",
            Feed::SafetyMetrics | Feed::Osha300 | Feed::Readiness | Feed::Contractors => "safety",
            Feed::Ist | Feed::Punch | Feed::Turnover => "commissioning",
            Feed::Permits | Feed::Leed => "environmental",
            Feed::ClaimTimeline | Feed::Notices | Feed::DelayAnalysis => "claims",
            Feed::Crane | Feed::Staging | Feed::Headcount => "site-logistics",
        }
    }

    /// Fetch through the typed endpoint so shape mismatches surface as errors
    pub async fn fetch(self, client: &ApiClient) -> Result<Value> {
        match self {
            Feed::Agents => json(client.agent_status().await?),
            Feed::Approvals => json(client.approvals().await?),
            Feed::Risks => json(client.risks().await?),
            Feed::Heatmap => json(client.risk_heatmap().await?),
            Feed::CriticalPath => json(client.critical_path().await?),
            Feed::FloatReport => json(client.float_report().await?),
            Feed::ComplianceTickets => json(client.compliance_tickets().await?),
            Feed::Vendors => json(client.vendors().await?),
            Feed::SupplyAlerts => json(client.supply_chain_alerts().await?),
            Feed::Shipments => json(client.shipments().await?),
            Feed::Budget => json(client.budget().await?),
            Feed::Evm => json(client.earned_value().await?),
            Feed::CashFlow => json(client.cash_flow().await?),
            Feed::ChangeOrders => json(client.change_orders().await?),
            Feed::Crews => json(client.crews().await?),
            Feed::Productivity => json(client.productivity().await?),
            Feed::Certifications => json(client.certifications().await?),
            Feed::DailyBrief => json(client.daily_brief().await?),
            Feed::SafetyMetrics => json(client.safety_metrics().await?),
            Feed::Osha300 => json(client.osha_300().await?),
            Feed::Readiness => json(client.readiness_score().await?),
            Feed::Contractors => json(client.contractor_safety().await?),
            Feed::Ist => json(client.ist_sequences().await?),
            Feed::Punch => json(client.punch_list().await?),
            Feed::Turnover => json(client.turnover_packages().await?),
            Feed::Permits => json(client.permits().await?),
            Feed::Leed => json(client.leed().await?),
            Feed::ClaimTimeline => json(client.claim_timeline().await?),
            Feed::Notices => json(client.notices().await?),
            Feed::DelayAnalysis => json(client.delay_analysis().await?),
            Feed::Crane => json(client.crane_schedule().await?),
            Feed::Staging => json(client.staging_plans().await?),
            Feed::Headcount => json(client.site_headcount().await?),
        }
    }

    /// Poller fetcher for this feed
    pub fn fetcher(self, client: &ApiClient) -> Fetcher<Value> {
        let client = client.clone();
        fetcher(move || {
            let client = client.clone();
            async move { self.fetch(&client).await }
        })
    }
}

fn json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_names_are_kebab_case() {
        assert_eq!(Feed::CriticalPath.name(), "critical-path");
        assert_eq!(Feed::Osha300.name(), "osha300");
        assert_eq!(Feed::Evm.name(), "evm");
    }

    #[test]
    fn test_feed_parses_from_name() {
        assert_eq!(Feed::from_str("float-report", false), Ok(Feed::FloatReport));
        assert_eq!(Feed::from_str("HEATMAP", true), Ok(Feed::Heatmap));
        assert!(Feed::from_str("weather", false).is_err());
    }

    #[test]
    fn test_unique_drops_non_adjacent_repeats_in_order() {
        let feeds = Feed::unique([Feed::Agents, Feed::Risks, Feed::Agents, Feed::Risks, Feed::Crane]);
        assert_eq!(feeds, vec![Feed::Agents, Feed::Risks, Feed::Crane]);
    }

    #[test]
    fn test_every_feed_round_trips_its_name() {
        for feed in Feed::all() {
            assert_eq!(Feed::from_str(&feed.name(), false), Ok(*feed));
            assert!(!feed.area().is_empty());
        }
    }
}
