//! Backend payload parsing and JsonSchema validation for entity types.

use attest_core::entities::*;
use attest_core::enums::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! parse_and_validate {
    ($name:ident, $ty:ty, $json:expr, |$parsed:ident| $checks:block) => {
        #[test]
        fn $name() {
            let $parsed: $ty = serde_json::from_str($json).expect("backend payload should parse");

            let reserialized = serde_json::to_value(&$parsed).unwrap();
            let recovered: $ty = serde_json::from_value(reserialized.clone()).unwrap();
            assert_eq!(recovered, $parsed, "roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let errors = validate_against_schema(&schema, &reserialized);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );

            $checks
        }
    };
}

parse_and_validate!(
    finding_from_backend,
    Finding,
    r#"{
        "id": 12,
        "audit_id": 3,
        "title": "MFA not enforced for admins",
        "description": "Admin console allows password-only login",
        "control_reference": "A.9.4.2",
        "severity": "critical",
        "status": "in_progress",
        "recommendation": "Enforce TOTP",
        "assigned_to_user_id": 4,
        "due_date": "2024-07-01T00:00:00",
        "created_at": "2024-06-01T09:15:00.123456+00:00",
        "updated_at": null,
        "evidences": [{
            "id": 1,
            "finding_id": 12,
            "file_name": "login.png",
            "file_path": "uploads/12/login.png",
            "file_size": 20480,
            "description": null,
            "created_at": "2024-06-02T10:00:00+00:00"
        }],
        "comments": [{
            "id": 8,
            "finding_id": 12,
            "user_id": 4,
            "comment": "Working on it",
            "created_at": "2024-06-03T10:00:00+00:00",
            "user": {"id": 4, "full_name": "Ayşe Yılmaz", "email": "ayse@example.com"}
        }],
        "assigned_to": {"id": 4, "full_name": "Ayşe Yılmaz", "email": "ayse@example.com"}
    }"#,
    |finding| {
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.status, FindingStatus::InProgress);
        assert!(finding.due_date.is_some());
        assert_eq!(finding.evidences.len(), 1);
        assert_eq!(finding.comments[0].user.as_ref().unwrap().id, 4);
    }
);

parse_and_validate!(
    finding_with_missing_optionals,
    Finding,
    r#"{
        "id": 1,
        "audit_id": 1,
        "title": "t",
        "severity": "info",
        "status": "open",
        "created_at": "2024-06-01T09:15:00Z"
    }"#,
    |finding| {
        assert!(finding.evidences.is_empty());
        assert!(finding.due_date.is_none());
        assert!(finding.assigned_to.is_none());
    }
);

parse_and_validate!(
    audit_from_backend,
    Audit,
    r#"{
        "id": 3,
        "name": "Q2 ISO review",
        "description": null,
        "standard": "ISO27001",
        "project_id": 2,
        "audit_date": "2024-06-10",
        "status": "planning",
        "created_at": "2024-05-20T08:00:00+03:00"
    }"#,
    |audit| {
        assert_eq!(audit.standard, AuditStandard::Iso27001);
        assert_eq!(audit.status, AuditStatus::Planning);
        assert!(audit.audit_date.is_some());
    }
);

parse_and_validate!(
    notification_from_backend,
    Notification,
    r#"{
        "id": 5,
        "user_id": 4,
        "type": "finding_due_soon",
        "title": "Bulgu Yakında Son Tarih",
        "message": "\"MFA not enforced\" bulgusu yakında son tarih (2 gün kaldı)",
        "related_entity_type": "finding",
        "related_entity_id": 12,
        "read": false,
        "created_at": "2024-06-01T09:15:00+00:00"
    }"#,
    |notification| {
        assert_eq!(notification.kind, NotificationType::FindingDueSoon);
        assert_eq!(notification.related_entity_id, Some(12));
    }
);

parse_and_validate!(
    template_from_backend,
    Template,
    r#"{
        "id": 1,
        "name": "ISO 27001 Annex A",
        "standard": "ISO27001",
        "organization_id": null,
        "is_system": true,
        "created_at": "2024-01-01T00:00:00+00:00",
        "items": [{
            "id": 10,
            "template_id": 1,
            "order_number": 1,
            "control_reference": "A.5.1",
            "default_title": "Information security policies",
            "default_severity": "medium",
            "default_status": "open",
            "created_at": "2024-01-01T00:00:00+00:00"
        }]
    }"#,
    |template| {
        assert!(template.is_system);
        assert!(!template.is_editable());
        assert_eq!(template.items[0].default_severity, Severity::Medium);
    }
);

parse_and_validate!(
    user_from_backend,
    User,
    r#"{
        "id": 4,
        "email": "ayse@example.com",
        "full_name": "Ayşe Yılmaz",
        "role": "org_admin",
        "organization_id": 2,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00+00:00"
    }"#,
    |user| {
        assert_eq!(user.role, Role::OrgAdmin);
        assert_eq!(user.organization_id, Some(2));
    }
);

parse_and_validate!(
    dashboard_stats_from_backend,
    DashboardStats,
    r#"{
        "total_projects": 3,
        "total_audits": 7,
        "total_findings": 40,
        "open_findings": 12,
        "urgent_findings": 4,
        "my_findings": 2,
        "overdue_findings": 1,
        "due_soon_findings": 3,
        "completion_rate": 70.0,
        "audit_status_distribution": {"planning": 2, "in_progress": 3, "completed": 2},
        "severity_distribution": {"critical": 2, "high": 5, "medium": 20, "low": 10, "info": 3},
        "status_distribution": {"open": 8, "in_progress": 4, "resolved": 20, "closed": 8}
    }"#,
    |stats| {
        assert_eq!(stats.severity_distribution["medium"], 20);
        assert_eq!(stats.status_distribution["closed"], 8);
    }
);

#[test]
fn update_payloads_skip_unset_fields() {
    let update = FindingUpdate {
        status: Some(FindingStatus::Resolved),
        ..Default::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({"status": "resolved"}));
}

#[test]
fn template_copy_sends_null_name() {
    let json = serde_json::to_value(TemplateCopy::default()).unwrap();
    assert_eq!(json, serde_json::json!({"new_name": null}));
}
