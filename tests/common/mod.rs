// ABOUTME: In-process fake of the construction backend for integration tests
// ABOUTME: Serves a mutable approval queue plus a few fixed and failing endpoints

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sitepulse::types::{ApprovalDecision, ApprovalRequest, ApprovalStatus, ImpactSummary};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct Backend {
    pub approvals: Arc<Mutex<Vec<ApprovalRequest>>>,
    pub triggered: Arc<Mutex<Vec<String>>>,
    pub approval_list_calls: Arc<Mutex<u32>>,
}

impl Backend {
    pub fn with_approvals(approvals: Vec<ApprovalRequest>) -> Self {
        Self {
            approvals: Arc::new(Mutex::new(approvals)),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> u32 {
        *self.approval_list_calls.lock().unwrap()
    }

    /// Bind on an ephemeral port and return the base URL
    pub async fn spawn(self) -> String {
        let router = Router::new()
            .route("/api/approvals", get(list_approvals))
            .route("/api/approvals/{id}/approve", post(approve))
            .route("/api/approvals/{id}/reject", post(reject))
            .route("/api/agents/{name}/run", post(run_agent))
            .route("/api/risks", get(risks))
            .route("/api/safety/metrics", get(unavailable))
            .route("/api/financial/budget", get(garbage))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

pub fn approval(id: &str, title: &str) -> ApprovalRequest {
    ApprovalRequest {
        id: id.to_string(),
        agent_name: "schedule_optimizer".to_string(),
        action_type: "resequence".to_string(),
        title: title.to_string(),
        description: "Swap crane picks on level 4".to_string(),
        confidence: 0.82,
        impact: ImpactSummary {
            cost_delta: -12_000.0,
            schedule_delta_days: -2.0,
            risk_change: "lower".to_string(),
            description: "Recovers two days of float".to_string(),
        },
        status: ApprovalStatus::Pending,
        ..Default::default()
    }
}

async fn list_approvals(State(backend): State<Backend>) -> Json<Vec<ApprovalRequest>> {
    *backend.approval_list_calls.lock().unwrap() += 1;
    Json(backend.approvals.lock().unwrap().clone())
}

fn decide(
    backend: &Backend,
    id: &str,
    decision: ApprovalDecision,
    status: ApprovalStatus,
) -> Result<Json<ApprovalRequest>, StatusCode> {
    let mut approvals = backend.approvals.lock().unwrap();
    let request = approvals
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    request.status = status;
    request.pm_notes = Some(decision.notes);
    Ok(Json(request.clone()))
}

async fn approve(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(decision): Json<ApprovalDecision>,
) -> Result<Json<ApprovalRequest>, StatusCode> {
    decide(&backend, &id, decision, ApprovalStatus::Approved)
}

async fn reject(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(decision): Json<ApprovalDecision>,
) -> Result<Json<ApprovalRequest>, StatusCode> {
    decide(&backend, &id, decision, ApprovalStatus::Rejected)
}

async fn run_agent(State(backend): State<Backend>, Path(name): Path<String>) -> StatusCode {
    backend.triggered.lock().unwrap().push(name);
    StatusCode::ACCEPTED
}

async fn risks() -> Json<Value> {
    Json(json!([{
        "id": "risk-1",
        "project_id": "dc-west",
        "category": "weather",
        "description": "High winds forecast during steel erection",
        "risk_score": {
            "probability": 0.6,
            "impact_dollars": 85000.0,
            "impact_days": 3.0,
            "safety_critical": true,
            "composite_score": 0.71
        },
        "confidence": 0.9,
        "status": "open",
        "created_at": "2026-03-02T08:00:00Z",
        "updated_at": null
    }]))
}

async fn unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn garbage() -> &'static str {
    "<html>not json</html>"
}
