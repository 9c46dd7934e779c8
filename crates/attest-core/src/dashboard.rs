//! Dashboard aggregation.
//!
//! The analytics endpoint normally provides the numbers. When it fails the
//! dashboard rebuilds them from the raw lists with [`stats_from_lists`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::entities::{Audit, DashboardStats, Finding};
use crate::enums::{AuditStatus, FindingStatus, Severity};
use crate::filters::{DueState, compare_by_urgency, sort_audits_recent_first};

/// Number of rows shown in the urgent-findings and recent-audits cards.
pub const DASHBOARD_LIST_LEN: usize = 5;

/// Active critical/high findings, critical first then newest, at most `limit`.
#[must_use]
pub fn urgent_findings(findings: &[Finding], limit: usize) -> Vec<Finding> {
    let mut urgent: Vec<Finding> = findings
        .iter()
        .filter(|f| f.severity.is_urgent() && f.status.is_active())
        .cloned()
        .collect();
    urgent.sort_by(compare_by_urgency);
    urgent.truncate(limit);
    urgent
}

/// Newest audits first, at most `limit`.
#[must_use]
pub fn recent_audits(audits: &[Audit], limit: usize) -> Vec<Audit> {
    let mut recent = audits.to_vec();
    sort_audits_recent_first(&mut recent);
    recent.truncate(limit);
    recent
}

/// Count findings per severity. Every severity is present, zero included.
#[must_use]
pub fn severity_distribution(findings: &[Finding]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = Severity::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    for finding in findings {
        *counts.entry(finding.severity.as_str().to_string()).or_default() += 1;
    }
    counts
}

/// Count findings per status. Every status is present, zero included.
#[must_use]
pub fn status_distribution(findings: &[Finding]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = FindingStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    for finding in findings {
        *counts.entry(finding.status.as_str().to_string()).or_default() += 1;
    }
    counts
}

/// Count audits per status. Every status is present, zero included.
#[must_use]
pub fn audit_status_distribution(audits: &[Audit]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = AuditStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    for audit in audits {
        *counts.entry(audit.status.as_str().to_string()).or_default() += 1;
    }
    counts
}

/// Rebuild dashboard numbers from full lists.
///
/// `current_user_id` feeds `my_findings`; pass `None` to leave it at zero.
/// Overdue and due-soon counts only consider active findings.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stats_from_lists(
    project_count: usize,
    audits: &[Audit],
    findings: &[Finding],
    current_user_id: Option<i64>,
    now: DateTime<Utc>,
) -> DashboardStats {
    let active: Vec<&Finding> = findings.iter().filter(|f| f.status.is_active()).collect();
    let settled = findings.len() - active.len();

    let count = |pred: &dyn Fn(&Finding) -> bool| -> u64 {
        active.iter().filter(|f| pred(**f)).count() as u64
    };

    let completion_rate = if findings.is_empty() {
        0.0
    } else {
        (settled as f64 / findings.len() as f64) * 100.0
    };

    DashboardStats {
        total_projects: project_count as u64,
        total_audits: audits.len() as u64,
        total_findings: findings.len() as u64,
        open_findings: active.len() as u64,
        urgent_findings: count(&|f| f.severity.is_urgent()),
        my_findings: current_user_id.map_or(0, |uid| {
            count(&|f| f.assigned_to_user_id == Some(uid))
        }),
        overdue_findings: count(&|f| DueState::classify(f.due_date, now) == DueState::Overdue),
        due_soon_findings: count(&|f| DueState::classify(f.due_date, now) == DueState::DueSoon),
        completion_rate,
        audit_status_distribution: audit_status_distribution(audits),
        severity_distribution: severity_distribution(findings),
        status_distribution: status_distribution(findings),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::AuditStandard;

    fn finding(id: i64, severity: Severity, status: FindingStatus, hour: u32) -> Finding {
        Finding {
            id,
            audit_id: 1,
            title: format!("f{id}"),
            description: None,
            control_reference: None,
            severity,
            status,
            recommendation: None,
            assigned_to_user_id: None,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
            updated_at: None,
            evidences: Vec::new(),
            comments: Vec::new(),
            assigned_to: None,
        }
    }

    fn audit(id: i64, status: AuditStatus, day: u32) -> Audit {
        Audit {
            id,
            name: format!("a{id}"),
            description: None,
            standard: AuditStandard::Iso27001,
            project_id: 1,
            audit_date: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn urgent_keeps_active_critical_and_high_only() {
        let findings = vec![
            finding(1, Severity::High, FindingStatus::Open, 5),
            finding(2, Severity::Critical, FindingStatus::InProgress, 1),
            finding(3, Severity::Critical, FindingStatus::Resolved, 9),
            finding(4, Severity::Medium, FindingStatus::Open, 8),
            finding(5, Severity::High, FindingStatus::InProgress, 7),
        ];
        let urgent: Vec<i64> = urgent_findings(&findings, 5).iter().map(|f| f.id).collect();
        assert_eq!(urgent, vec![2, 5, 1]);
    }

    #[test]
    fn urgent_is_capped() {
        let findings: Vec<Finding> = (0..8)
            .map(|i| finding(i, Severity::Critical, FindingStatus::Open, u32::try_from(i).unwrap()))
            .collect();
        let urgent = urgent_findings(&findings, DASHBOARD_LIST_LEN);
        assert_eq!(urgent.len(), 5);
        assert_eq!(urgent[0].id, 7);
    }

    #[test]
    fn recent_audits_newest_first() {
        let audits = vec![
            audit(1, AuditStatus::Planning, 3),
            audit(2, AuditStatus::Completed, 10),
            audit(3, AuditStatus::InProgress, 7),
        ];
        let ids: Vec<i64> = recent_audits(&audits, 2).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn distributions_include_zero_buckets() {
        let findings = vec![finding(1, Severity::Low, FindingStatus::Open, 0)];
        let severity = severity_distribution(&findings);
        assert_eq!(severity.len(), 5);
        assert_eq!(severity["low"], 1);
        assert_eq!(severity["critical"], 0);
        let status = status_distribution(&findings);
        assert_eq!(status.len(), 4);
        assert_eq!(status["open"], 1);
    }

    #[test]
    fn stats_from_lists_counts() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let mut overdue = finding(1, Severity::Critical, FindingStatus::Open, 0);
        overdue.due_date = Some(now - Duration::days(2));
        overdue.assigned_to_user_id = Some(7);
        let mut soon = finding(2, Severity::Low, FindingStatus::InProgress, 0);
        soon.due_date = Some(now + Duration::days(1));
        let mut closed_late = finding(3, Severity::High, FindingStatus::Closed, 0);
        closed_late.due_date = Some(now - Duration::days(9));
        let resolved = finding(4, Severity::Info, FindingStatus::Resolved, 0);

        let findings = vec![overdue, soon, closed_late, resolved];
        let audits = vec![audit(1, AuditStatus::InProgress, 1)];
        let stats = stats_from_lists(3, &audits, &findings, Some(7), now);

        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.total_audits, 1);
        assert_eq!(stats.total_findings, 4);
        assert_eq!(stats.open_findings, 2);
        assert_eq!(stats.urgent_findings, 1);
        assert_eq!(stats.my_findings, 1);
        assert_eq!(stats.overdue_findings, 1);
        assert_eq!(stats.due_soon_findings, 1);
        assert!((stats.completion_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.audit_status_distribution["in_progress"], 1);
    }

    #[test]
    fn completion_rate_is_zero_without_findings() {
        let stats = stats_from_lists(0, &[], &[], None, Utc::now());
        assert!(stats.completion_rate.abs() < f64::EPSILON);
    }
}
