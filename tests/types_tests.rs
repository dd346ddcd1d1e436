// ABOUTME: Deserialization tests for representative backend payloads
// ABOUTME: Checks enum spellings, renamed fields, and optional/defaulted members

use serde_json::json;
use sitepulse::types::*;

#[test]
fn test_approval_request_decodes_full_payload() {
    let request: ApprovalRequest = serde_json::from_value(json!({
        "id": "apr-9",
        "agent_name": "supply_chain_sentinel",
        "action_type": "switch_vendor",
        "title": "Switch transformer vendor",
        "description": "Primary vendor slipped 6 weeks",
        "confidence": 0.74,
        "data_sources": [{
            "source_type": "email",
            "source_name": "vendor-update.eml",
            "retrieved_at": "2026-03-01T10:00:00Z",
            "confidence": 0.9
        }],
        "transparency_log": ["Read vendor email", "Compared lead times"],
        "impact": {
            "cost_delta": 40000.0,
            "schedule_delta_days": -21.0,
            "risk_change": "lower",
            "description": "Recovers three weeks"
        },
        "status": "rejected",
        "pm_notes": "Budget is locked"
    }))
    .unwrap();

    assert_eq!(request.status, ApprovalStatus::Rejected);
    assert!(!request.is_pending());
    assert_eq!(request.data_sources.len(), 1);
    assert_eq!(request.transparency_log.len(), 2);
    assert_eq!(request.impact.schedule_delta_days, -21.0);
    assert_eq!(request.pm_notes.as_deref(), Some("Budget is locked"));
}

#[test]
fn test_optional_lists_default_to_empty() {
    let request: ApprovalRequest = serde_json::from_value(json!({
        "id": "apr-1",
        "agent_name": "risk_forecaster",
        "action_type": "notify",
        "title": "t",
        "description": "d",
        "confidence": 0.5,
        "impact": {
            "cost_delta": 0.0,
            "schedule_delta_days": 0.0,
            "risk_change": "none",
            "description": ""
        },
        "status": "pending"
    }))
    .unwrap();

    assert!(request.is_pending());
    assert!(request.data_sources.is_empty());
    assert_eq!(request.pm_notes, None);
}

#[test]
fn test_unknown_status_is_rejected() {
    let result = serde_json::from_value::<FloatReport>(json!({
        "activity_id": "A100",
        "activity_name": "Pour level 3 deck",
        "total_float": 2.0,
        "free_float": 0.0,
        "status": "doomed"
    }));
    assert!(result.is_err());
}

#[test]
fn test_claim_event_type_field_is_renamed() {
    let event: ClaimEvent = serde_json::from_value(json!({
        "id": "clm-1",
        "title": "Differing site conditions",
        "type": "REA",
        "amount": 250000.0,
        "filed_date": "2026-02-10",
        "status": "open",
        "milestones": [{ "date": "2026-02-10", "event": "Notice sent" }]
    }))
    .unwrap();

    assert_eq!(event.claim_type, "REA");
    assert_eq!(event.milestones[0].event, "Notice sent");

    let back = serde_json::to_value(&event).unwrap();
    assert_eq!(back["type"], "REA");
    assert!(back.get("claim_type").is_none());
}

#[test]
fn test_critical_path_filters_critical_activities() {
    let path: CriticalPath = serde_json::from_value(json!({
        "activities": [
            {
                "id": "1", "external_id": "A100", "name": "Foundations",
                "start_date": "2026-01-05", "end_date": "2026-02-01",
                "total_float": 0.0, "is_critical": true, "tier_critical": true
            },
            {
                "id": "2", "external_id": "A200", "name": "Site fencing",
                "start_date": null, "end_date": null,
                "total_float": 12.0, "is_critical": false, "tier_critical": false
            }
        ],
        "total_duration_days": 210.0,
        "float_summary": { "A200": 12.0 }
    }))
    .unwrap();

    let critical: Vec<_> = path.critical_activities().map(|a| a.external_id.as_str()).collect();
    assert_eq!(critical, vec!["A100"]);
    assert_eq!(path.float_summary.get("A200"), Some(&12.0));
}

#[test]
fn test_daily_brief_without_acceleration() {
    let brief: DailyBrief = serde_json::from_value(json!({
        "brief_date": "2026-03-02",
        "generated_at": "2026-03-02T06:00:00Z",
        "top_threats": [{
            "rank": 1,
            "title": "Switchgear late",
            "agent_source": "supply_chain_sentinel",
            "impact": "3 weeks",
            "confidence": 0.8,
            "action_required": "Approve alternate vendor"
        }],
        "acceleration": null,
        "full_text": "..."
    }))
    .unwrap();

    assert_eq!(brief.top_threats.len(), 1);
    assert!(brief.quality_gaps.is_empty());
    assert!(brief.acceleration.is_none());
}

#[test]
fn test_default_values_are_usable_fallbacks() {
    let request = ApprovalRequest::default();
    assert!(request.is_pending());
    assert!(RiskHeatMap::default().cells.is_empty());
}
