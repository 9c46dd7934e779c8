use attest_core::entities::{
    ActivityLog, Audit, DashboardStats, Finding, Notification, Organization, Project, Template,
    User,
};
use attest_core::filters::StatusBucket;
use attest_prefs::DashboardCard;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `attest schema`.
const SCHEMA_TYPES: [&str; 11] = [
    "activity",
    "audit",
    "dashboard-card",
    "dashboard-stats",
    "finding",
    "notification",
    "organization",
    "project",
    "status-bucket",
    "template",
    "user",
];

/// Handle `attest schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        )
    })?;
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> Option<Schema> {
    let schema = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "activity" => schema_for!(ActivityLog),
        "audit" => schema_for!(Audit),
        "dashboard-card" => schema_for!(DashboardCard),
        "dashboard-stats" => schema_for!(DashboardStats),
        "finding" => schema_for!(Finding),
        "notification" => schema_for!(Notification),
        "organization" => schema_for!(Organization),
        "project" => schema_for!(Project),
        "status-bucket" => schema_for!(StatusBucket),
        "template" => schema_for!(Template),
        "user" => schema_for!(User),
        _ => return None,
    };
    Some(schema)
}
