use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregates returned by `GET /analytics/dashboard`.
///
/// Distributions are keyed by the wire name of the status or severity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub total_audits: u64,
    pub total_findings: u64,
    pub open_findings: u64,
    #[serde(default)]
    pub urgent_findings: u64,
    #[serde(default)]
    pub my_findings: u64,
    #[serde(default)]
    pub overdue_findings: u64,
    #[serde(default)]
    pub due_soon_findings: u64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub audit_status_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub severity_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub status_distribution: BTreeMap<String, u64>,
}

/// One day of the findings timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: String,
    pub count: u64,
}
