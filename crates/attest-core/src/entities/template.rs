use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::enums::{AuditStandard, FindingStatus, Severity};
use crate::serde_time;

/// One default finding inside a template checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateItem {
    pub id: i64,
    pub template_id: i64,
    pub order_number: i32,
    #[serde(default)]
    pub control_reference: Option<String>,
    pub default_title: String,
    #[serde(default)]
    pub default_description: Option<String>,
    pub default_severity: Severity,
    pub default_status: FindingStatus,
    #[serde(default)]
    pub default_recommendation: Option<String>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A reusable finding checklist for a standard.
///
/// System templates (`is_system`) are shipped with the platform and cannot be
/// edited; copy them into an organization first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub standard: AuditStandard,
    /// `None` for system templates.
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub items: Vec<TemplateItem>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !self.is_system
    }
}

impl Identified for Template {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Payload for creating or replacing a template item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateItemInput {
    pub order_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_reference: Option<String>,
    pub default_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_description: Option<String>,
    pub default_severity: Severity,
    pub default_status: FindingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub standard: AuditStandard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<TemplateItemInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<AuditStandard>,
}

/// Body of `POST /templates/{id}/copy`. A null name lets the backend pick.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateCopy {
    pub new_name: Option<String>,
    /// Target organization, needed when a platform admin copies a system
    /// template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
}
