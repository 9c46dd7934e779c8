use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::enums::{AuditStandard, AuditStatus};
use crate::serde_time;

/// An audit of a project against a compliance standard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Audit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub standard: AuditStandard,
    pub project_id: i64,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub audit_date: Option<DateTime<Utc>>,
    pub status: AuditStatus,
    #[serde(with = "serde_time::lenient_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Audit {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub standard: AuditStandard,
    pub project_id: i64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::lenient_utc_option"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub audit_date: Option<DateTime<Utc>>,
    /// Seed the audit's findings from this template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
    /// Language of the seeded template items (`tr` / `en`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<AuditStandard>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::lenient_utc_option"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub audit_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
}
