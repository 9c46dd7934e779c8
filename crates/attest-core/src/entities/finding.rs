use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::enums::{FindingStatus, Severity};
use crate::serde_time;

/// Minimal user view embedded in findings, comments and activity rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// A file attached to a finding. The bytes live on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evidence {
    pub id: i64,
    pub finding_id: i64,
    pub file_name: String,
    pub file_path: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "serde_time::lenient_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub finding_id: i64,
    pub user_id: i64,
    pub comment: String,
    #[serde(with = "serde_time::lenient_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentCreate {
    pub comment: String,
}

/// A recorded audit observation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Finding {
    pub id: i64,
    pub audit_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub control_reference: Option<String>,
    pub severity: Severity,
    pub status: FindingStatus,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub assigned_to_user_id: Option<i64>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(with = "serde_time::lenient_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub evidences: Vec<Evidence>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub assigned_to: Option<UserSummary>,
}

impl Identified for Finding {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FindingCreate {
    pub audit_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_reference: Option<String>,
    pub severity: Severity,
    pub status: FindingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::lenient_utc_option"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FindingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FindingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::lenient_utc_option"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub due_date: Option<DateTime<Utc>>,
}
