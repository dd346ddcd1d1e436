// ABOUTME: One typed method per backend endpoint, grouped by dashboard area.
// ABOUTME: Reads are GET, agent actions and analyses are POST.

use anyhow::Result;
use serde_json::Value;

use super::ApiClient;
use crate::types::*;

// =============================================================================
// Risks
// =============================================================================

impl ApiClient {
    pub async fn risks(&self) -> Result<Vec<RiskEvent>> {
        self.get("/api/risks").await
    }

    pub async fn risk_heatmap(&self) -> Result<RiskHeatMap> {
        self.get("/api/risks/heatmap").await
    }

    pub async fn assess_risks(&self, request: &RiskAssessmentRequest) -> Result<Value> {
        self.post("/api/risks/assess", Some(request)).await
    }
}

// =============================================================================
// Schedule
// =============================================================================

impl ApiClient {
    pub async fn critical_path(&self) -> Result<CriticalPath> {
        self.get("/api/schedule/critical-path").await
    }

    pub async fn simulate_schedule(&self, request: &SimulationRequest) -> Result<MonteCarloResult> {
        self.post("/api/schedule/simulate", Some(request)).await
    }

    pub async fn float_report(&self) -> Result<Vec<FloatReport>> {
        self.get("/api/schedule/float-report").await
    }
}

// =============================================================================
// Documents
// =============================================================================

#[derive(serde::Serialize)]
struct DocumentQuery<'a> {
    query: &'a str,
}

impl ApiClient {
    pub async fn search_documents(&self, query: &str) -> Result<Value> {
        self.post("/api/documents/search", Some(&DocumentQuery { query }))
            .await
    }

    pub async fn document_contradictions(&self) -> Result<Value> {
        self.get("/api/documents/contradictions").await
    }
}

// =============================================================================
// Compliance
// =============================================================================

impl ApiClient {
    pub async fn compliance_tickets(&self) -> Result<Vec<DeviationTicket>> {
        self.get("/api/compliance/tickets").await
    }

    pub async fn run_compliance_check(&self) -> Result<ComplianceRun> {
        self.post::<(), _>("/api/compliance/check", None).await
    }

    pub async fn compliance_summary(&self) -> Result<Value> {
        self.get("/api/compliance/summary").await
    }
}

// =============================================================================
// Supply chain
// =============================================================================

impl ApiClient {
    pub async fn vendors(&self) -> Result<Vec<VendorStatus>> {
        self.get("/api/supply-chain/vendors").await
    }

    pub async fn supply_chain_alerts(&self) -> Result<Vec<SupplyChainAlert>> {
        self.get("/api/supply-chain/alerts").await
    }

    pub async fn shipments(&self) -> Result<Vec<ShipmentTracking>> {
        self.get("/api/supply-chain/shipments").await
    }

    pub async fn find_alternatives(&self) -> Result<Value> {
        self.post::<(), _>("/api/supply-chain/alternatives", None)
            .await
    }
}

// =============================================================================
// Financial
// =============================================================================

impl ApiClient {
    pub async fn earned_value(&self) -> Result<EarnedValue> {
        self.get("/api/financial/evm").await
    }

    pub async fn cash_flow(&self) -> Result<Vec<CashFlow>> {
        self.get("/api/financial/cashflow").await
    }

    pub async fn budget(&self) -> Result<BudgetStatus> {
        self.get("/api/financial/budget").await
    }

    pub async fn change_orders(&self) -> Result<Vec<ChangeOrder>> {
        self.get("/api/financial/change-orders").await
    }
}

// =============================================================================
// Workforce
// =============================================================================

impl ApiClient {
    pub async fn crews(&self) -> Result<Vec<CrewStatus>> {
        self.get("/api/workforce/crews").await
    }

    pub async fn productivity(&self) -> Result<Vec<ProductivityMetric>> {
        self.get("/api/workforce/productivity").await
    }

    pub async fn certifications(&self) -> Result<Vec<CertificationRecord>> {
        self.get("/api/workforce/certs").await
    }

    pub async fn workforce_forecast(&self) -> Result<Value> {
        self.get("/api/workforce/forecast").await
    }
}

// =============================================================================
// Daily briefs
// =============================================================================

impl ApiClient {
    pub async fn daily_brief(&self) -> Result<DailyBrief> {
        self.get("/api/briefs/daily").await
    }

    /// `date` is YYYY-MM-DD
    pub async fn brief_for_date(&self, date: &str) -> Result<DailyBrief> {
        self.get(&format!("/api/briefs/{}", date)).await
    }
}

// =============================================================================
// Approvals
// =============================================================================

impl ApiClient {
    pub async fn approvals(&self) -> Result<Vec<ApprovalRequest>> {
        self.get("/api/approvals").await
    }

    pub async fn approval(&self, id: &str) -> Result<ApprovalRequest> {
        self.get(&format!("/api/approvals/{}", id)).await
    }

    pub async fn approve(&self, id: &str, notes: &str) -> Result<ApprovalRequest> {
        let decision = ApprovalDecision {
            notes: notes.to_string(),
        };
        self.post(&format!("/api/approvals/{}/approve", id), Some(&decision))
            .await
    }

    pub async fn reject(&self, id: &str, notes: &str) -> Result<ApprovalRequest> {
        let decision = ApprovalDecision {
            notes: notes.to_string(),
        };
        self.post(&format!("/api/approvals/{}/reject", id), Some(&decision))
            .await
    }
}

// =============================================================================
// Agents
// =============================================================================

impl ApiClient {
    pub async fn agent_status(&self) -> Result<Vec<AgentStatus>> {
        self.get("/api/agents/status").await
    }

    /// Kick off an agent run; the backend works asynchronously
    pub async fn trigger_agent(&self, name: &str) -> Result<()> {
        self.post_action(&format!("/api/agents/{}/run", name)).await
    }

    pub async fn agent_history(&self, name: &str) -> Result<Value> {
        self.get(&format!("/api/agents/{}/history", name)).await
    }
}

// =============================================================================
// Safety
// =============================================================================

impl ApiClient {
    pub async fn safety_metrics(&self) -> Result<SafetyMetrics> {
        self.get("/api/safety/metrics").await
    }

    pub async fn osha_300(&self) -> Result<Vec<Osha300Record>> {
        self.get("/api/safety/osha300").await
    }

    pub async fn inspections(&self) -> Result<Value> {
        self.get("/api/safety/inspections").await
    }

    pub async fn readiness_score(&self) -> Result<InspectionReadiness> {
        self.get("/api/safety/readiness-score").await
    }

    pub async fn contractor_safety(&self) -> Result<Vec<ContractorSafetyProfile>> {
        self.get("/api/safety/contractors").await
    }

    pub async fn exposure(&self) -> Result<Value> {
        self.get("/api/safety/exposure").await
    }
}

// =============================================================================
// Commissioning
// =============================================================================

impl ApiClient {
    pub async fn ist_sequences(&self) -> Result<Vec<IstSequence>> {
        self.get("/api/commissioning/ist").await
    }

    pub async fn punch_list(&self) -> Result<Vec<PunchItem>> {
        self.get("/api/commissioning/punch").await
    }

    pub async fn turnover_packages(&self) -> Result<Vec<TurnoverPackage>> {
        self.get("/api/commissioning/turnover").await
    }
}

// =============================================================================
// Environmental
// =============================================================================

impl ApiClient {
    pub async fn permits(&self) -> Result<Vec<PermitStatus>> {
        self.get("/api/environmental/permits").await
    }

    pub async fn leed(&self) -> Result<LeedTracking> {
        self.get("/api/environmental/leed").await
    }

    pub async fn carbon(&self) -> Result<Value> {
        self.get("/api/environmental/carbon").await
    }
}

// =============================================================================
// Claims
// =============================================================================

impl ApiClient {
    pub async fn claim_timeline(&self) -> Result<Vec<ClaimEvent>> {
        self.get("/api/claims/timeline").await
    }

    pub async fn notices(&self) -> Result<Vec<NoticeRecord>> {
        self.get("/api/claims/notices").await
    }

    pub async fn delay_analysis(&self) -> Result<DelayAnalysis> {
        self.get("/api/claims/delay-analysis").await
    }
}

// =============================================================================
// Site logistics
// =============================================================================

impl ApiClient {
    pub async fn crane_schedule(&self) -> Result<Vec<CraneScheduleEntry>> {
        self.get("/api/site-logistics/crane").await
    }

    pub async fn staging_plans(&self) -> Result<Vec<StagingPlan>> {
        self.get("/api/site-logistics/staging").await
    }

    pub async fn site_headcount(&self) -> Result<SiteHeadcount> {
        self.get("/api/site-logistics/headcount").await
    }
}
