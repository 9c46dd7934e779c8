//! Client-side filters and orderings that the backend list endpoints do not
//! express as query parameters.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Audit, Finding};
use crate::enums::{FindingStatus, Severity};

/// Window ahead of `now` in which a due date counts as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

// ---------------------------------------------------------------------------
// StatusBucket
// ---------------------------------------------------------------------------

/// Logical status filter on the findings list.
///
/// `Active` covers open and in-progress findings. `Resolved` matches only the
/// literal `resolved` status; closed findings are reachable through `Closed`
/// or `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    #[default]
    All,
    Active,
    Resolved,
    Open,
    InProgress,
    Closed,
}

impl StatusBucket {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn matches(self, status: FindingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status.is_active(),
            Self::Resolved => matches!(status, FindingStatus::Resolved),
            Self::Open => matches!(status, FindingStatus::Open),
            Self::InProgress => matches!(status, FindingStatus::InProgress),
            Self::Closed => matches!(status, FindingStatus::Closed),
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only findings whose status falls in `bucket`.
#[must_use]
pub fn filter_by_bucket(mut findings: Vec<Finding>, bucket: StatusBucket) -> Vec<Finding> {
    findings.retain(|finding| bucket.matches(finding.status));
    findings
}

// ---------------------------------------------------------------------------
// ReadFilter
// ---------------------------------------------------------------------------

/// Read-state filter on the notifications list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ReadFilter {
    /// Value of the `read` query parameter; `None` means "do not send".
    #[must_use]
    pub const fn as_query(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Unread => Some(false),
            Self::Read => Some(true),
        }
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Critical before everything else, then newest first.
///
/// Only `critical` is promoted; the other severities compare equal and fall
/// through to `created_at`.
#[must_use]
pub fn compare_by_urgency(a: &Finding, b: &Finding) -> Ordering {
    let a_critical = a.severity == Severity::Critical;
    let b_critical = b.severity == Severity::Critical;
    b_critical
        .cmp(&a_critical)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Order for the findings list: active findings before resolved/closed ones,
/// each group ordered by [`compare_by_urgency`].
pub fn sort_for_listing(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        a.status
            .is_settled()
            .cmp(&b.status.is_settled())
            .then_with(|| compare_by_urgency(a, b))
    });
}

/// Newest audits first.
pub fn sort_audits_recent_first(audits: &mut [Audit]) {
    audits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

// ---------------------------------------------------------------------------
// Due dates
// ---------------------------------------------------------------------------

/// Strictly before `now`.
#[must_use]
pub fn is_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due < now
}

/// Within `[now, now + 3 days]`. Never true for an overdue date.
#[must_use]
pub fn is_due_soon(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due >= now && due <= now + Duration::days(DUE_SOON_WINDOW_DAYS)
}

/// Display classification of a finding's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueState {
    NoDueDate,
    Overdue,
    DueSoon,
    OnTrack,
}

impl DueState {
    #[must_use]
    pub fn classify(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match due {
            None => Self::NoDueDate,
            Some(due) if is_overdue(due, now) => Self::Overdue,
            Some(due) if is_due_soon(due, now) => Self::DueSoon,
            Some(_) => Self::OnTrack,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn finding(id: i64, severity: Severity, status: FindingStatus, created_hour: u32) -> Finding {
        Finding {
            id,
            audit_id: 1,
            title: format!("finding {id}"),
            description: None,
            control_reference: None,
            severity,
            status,
            recommendation: None,
            assigned_to_user_id: None,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, created_hour, 0, 0).unwrap(),
            updated_at: None,
            evidences: Vec::new(),
            comments: Vec::new(),
            assigned_to: None,
        }
    }

    fn mixed() -> Vec<Finding> {
        vec![
            finding(1, Severity::High, FindingStatus::Open, 1),
            finding(2, Severity::Low, FindingStatus::InProgress, 2),
            finding(3, Severity::Medium, FindingStatus::Resolved, 3),
            finding(4, Severity::Critical, FindingStatus::Closed, 4),
        ]
    }

    fn ids(findings: &[Finding]) -> Vec<i64> {
        findings.iter().map(|f| f.id).collect()
    }

    #[rstest]
    #[case(StatusBucket::All, vec![1, 2, 3, 4])]
    #[case(StatusBucket::Active, vec![1, 2])]
    #[case(StatusBucket::Resolved, vec![3])]
    #[case(StatusBucket::Open, vec![1])]
    #[case(StatusBucket::InProgress, vec![2])]
    #[case(StatusBucket::Closed, vec![4])]
    fn bucket_filter(#[case] bucket: StatusBucket, #[case] expected: Vec<i64>) {
        assert_eq!(ids(&filter_by_bucket(mixed(), bucket)), expected);
    }

    #[test]
    fn resolved_bucket_excludes_closed() {
        let filtered = filter_by_bucket(mixed(), StatusBucket::Resolved);
        assert!(filtered.iter().all(|f| f.status != FindingStatus::Closed));
    }

    #[test]
    fn listing_puts_active_first_then_critical_then_newest() {
        let mut findings = vec![
            finding(1, Severity::Low, FindingStatus::Resolved, 9),
            finding(2, Severity::High, FindingStatus::Open, 1),
            finding(3, Severity::Critical, FindingStatus::Open, 0),
            finding(4, Severity::Medium, FindingStatus::InProgress, 5),
            finding(5, Severity::Critical, FindingStatus::Closed, 2),
        ];
        sort_for_listing(&mut findings);
        assert_eq!(ids(&findings), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn urgency_only_promotes_critical() {
        let high_new = finding(1, Severity::High, FindingStatus::Open, 10);
        let info_newer = finding(2, Severity::Info, FindingStatus::Open, 11);
        assert_eq!(compare_by_urgency(&info_newer, &high_new), Ordering::Less);
    }

    #[test]
    fn read_filter_query_values() {
        assert_eq!(ReadFilter::All.as_query(), None);
        assert_eq!(ReadFilter::Unread.as_query(), Some(false));
        assert_eq!(ReadFilter::Read.as_query(), Some(true));
    }

    #[test]
    fn overdue_is_strict() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert!(is_overdue(now - Duration::seconds(1), now));
        assert!(!is_overdue(now, now));
    }

    #[test]
    fn due_soon_boundaries_are_inclusive() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let edge = now + Duration::days(3);
        assert!(is_due_soon(now, now));
        assert!(is_due_soon(edge, now));
        assert!(!is_due_soon(edge + Duration::seconds(1), now));
        assert!(!is_due_soon(now - Duration::seconds(1), now));
    }

    #[test]
    fn due_state_classification() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(DueState::classify(None, now), DueState::NoDueDate);
        assert_eq!(
            DueState::classify(Some(now - Duration::hours(1)), now),
            DueState::Overdue
        );
        assert_eq!(DueState::classify(Some(now), now), DueState::DueSoon);
        assert_eq!(
            DueState::classify(Some(now + Duration::days(4)), now),
            DueState::OnTrack
        );
    }
}
