use attest_client::FindingQuery;
use attest_core::entities::Finding;
use attest_core::enums::{FindingStatus, Severity};
use attest_core::filters::{DueState, StatusBucket, filter_by_bucket, sort_for_listing};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DueArg;
use crate::commands::shared::limit::truncate;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct ListFilters<'a> {
    pub audit: Option<i64>,
    pub assigned_to: Option<i64>,
    pub mine: bool,
    pub status: Option<&'a str>,
    pub severity: Option<&'a str>,
    pub due: Option<DueArg>,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
struct FindingRow {
    id: i64,
    audit_id: i64,
    title: String,
    severity: Severity,
    status: FindingStatus,
    assignee: Option<String>,
    due_date: Option<DateTime<Utc>>,
    due_state: DueState,
}

pub async fn run(filters: &ListFilters<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bucket = parse_opt_enum::<StatusBucket>(filters.status, "status")?.unwrap_or_default();
    let severity = parse_opt_enum::<Severity>(filters.severity, "severity")?;

    let assigned_to_user_id = if filters.mine {
        Some(ctx.current_user().await?.id)
    } else {
        filters.assigned_to
    };

    let findings = ctx
        .api
        .list_findings(FindingQuery {
            audit_id: filters.audit,
            assigned_to_user_id,
        })
        .await?;

    let now = Utc::now();
    let mut findings = apply_filters(findings, bucket, severity, filters.due, now);
    truncate(&mut findings, filters.limit);

    let rows = findings
        .into_iter()
        .map(|finding| finding_row(finding, now))
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn apply_filters(
    findings: Vec<Finding>,
    bucket: StatusBucket,
    severity: Option<Severity>,
    due: Option<DueArg>,
    now: DateTime<Utc>,
) -> Vec<Finding> {
    let mut findings = filter_by_bucket(findings, bucket);
    if let Some(severity) = severity {
        findings.retain(|finding| finding.severity == severity);
    }
    if let Some(due) = due {
        let wanted = match due {
            DueArg::Overdue => DueState::Overdue,
            DueArg::DueSoon => DueState::DueSoon,
        };
        findings.retain(|finding| {
            finding.status.is_active() && DueState::classify(finding.due_date, now) == wanted
        });
    }
    sort_for_listing(&mut findings);
    findings
}

fn finding_row(finding: Finding, now: DateTime<Utc>) -> FindingRow {
    FindingRow {
        due_state: DueState::classify(finding.due_date, now),
        assignee: finding.assigned_to.map(|user| user.full_name),
        id: finding.id,
        audit_id: finding.audit_id,
        title: finding.title,
        severity: finding.severity,
        status: finding.status,
        due_date: finding.due_date,
    }
}

#[cfg(test)]
mod tests {
    use attest_core::entities::Finding;
    use attest_core::enums::{FindingStatus, Severity};
    use attest_core::filters::StatusBucket;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::apply_filters;
    use crate::cli::subcommands::DueArg;

    fn mk(id: i64, severity: Severity, status: FindingStatus, due_in_days: Option<i64>) -> Finding {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
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
            due_date: due_in_days.map(|days| now + Duration::days(days)),
            created_at: now - Duration::hours(id),
            updated_at: None,
            evidences: Vec::new(),
            comments: Vec::new(),
            assigned_to: None,
        }
    }

    fn ids(findings: &[Finding]) -> Vec<i64> {
        findings.iter().map(|f| f.id).collect()
    }

    fn sample() -> Vec<Finding> {
        vec![
            mk(1, Severity::Low, FindingStatus::Resolved, Some(-2)),
            mk(2, Severity::High, FindingStatus::Open, Some(-1)),
            mk(3, Severity::Critical, FindingStatus::InProgress, Some(2)),
            mk(4, Severity::High, FindingStatus::Closed, None),
            mk(5, Severity::Medium, FindingStatus::Open, Some(10)),
        ]
    }

    #[test]
    fn active_bucket_sorted_critical_first() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let out = apply_filters(sample(), StatusBucket::Active, None, None, now);
        assert_eq!(ids(&out), vec![3, 2, 5]);
    }

    #[test]
    fn resolved_bucket_excludes_closed() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let out = apply_filters(sample(), StatusBucket::Resolved, None, None, now);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn due_filters_only_consider_active_findings() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let overdue = apply_filters(sample(), StatusBucket::All, None, Some(DueArg::Overdue), now);
        assert_eq!(ids(&overdue), vec![2]);
        let soon = apply_filters(sample(), StatusBucket::All, None, Some(DueArg::DueSoon), now);
        assert_eq!(ids(&soon), vec![3]);
    }

    #[test]
    fn severity_filter_composes_with_bucket() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let out = apply_filters(sample(), StatusBucket::All, Some(Severity::High), None, now);
        assert_eq!(ids(&out), vec![2, 4]);
    }
}
