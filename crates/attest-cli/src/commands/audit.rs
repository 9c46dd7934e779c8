use std::path::{Path, PathBuf};

use anyhow::Context;
use attest_core::entities::{Audit, AuditCreate, AuditUpdate, Project};
use attest_core::enums::{AuditStandard, AuditStatus};
use attest_core::filters::sort_audits_recent_first;
use attest_core::lookup::IdIndex;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::limit::truncate;
use crate::commands::shared::parse::{parse_opt_date, parse_opt_enum, parse_standard};
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditRow {
    id: i64,
    name: String,
    standard: AuditStandard,
    status: AuditStatus,
    project: String,
    audit_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: PathBuf,
    bytes: usize,
}

/// Handle `attest audit`.
pub async fn handle(action: &AuditCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        AuditCommands::List {
            project,
            status,
            limit,
        } => {
            let status = parse_opt_enum::<AuditStatus>(status.as_deref(), "status")?;
            let mut audits = ctx.api.list_audits(*project).await?;
            if let Some(status) = status {
                audits.retain(|audit| audit.status == status);
            }
            sort_audits_recent_first(&mut audits);
            truncate(&mut audits, ctx.limit(*limit, flags));

            let projects = IdIndex::build(ctx.api.list_projects(None).await.unwrap_or_default());
            let rows = audits
                .into_iter()
                .map(|audit| audit_row(audit, &projects))
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        AuditCommands::Get { id } => output(&ctx.api.get_audit(*id).await?, flags.format),
        AuditCommands::Create {
            name,
            project,
            standard,
            description,
            date,
            status,
            template,
        } => {
            let data = AuditCreate {
                name: name.clone(),
                description: description.clone(),
                standard: parse_standard(standard)?,
                project_id: *project,
                audit_date: parse_opt_date(date.as_deref(), "date")?,
                template_id: *template,
                status: parse_opt_enum(status.as_deref(), "status")?,
                language: template.map(|_| ctx.locale.as_str().to_string()),
            };
            output(&ctx.api.create_audit(&data).await?, flags.format)
        }
        AuditCommands::Update {
            id,
            name,
            description,
            standard,
            date,
            status,
        } => {
            let data = AuditUpdate {
                name: name.clone(),
                description: description.clone(),
                standard: standard.as_deref().map(parse_standard).transpose()?,
                audit_date: parse_opt_date(date.as_deref(), "date")?,
                status: parse_opt_enum(status.as_deref(), "status")?,
            };
            output(&ctx.api.update_audit(*id, &data).await?, flags.format)
        }
        AuditCommands::Delete { id } => {
            ctx.api.delete_audit(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
        AuditCommands::Copy { id, name } => output(&ctx.api.copy_audit(*id, name).await?, flags.format),
        AuditCommands::Export { id, output: target } => {
            let report = ctx.api.export_audit_word(*id).await?;
            let path = export_path(target.as_deref(), &report.filename);
            std::fs::write(&path, &report.bytes)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            output(
                &ExportResponse {
                    path,
                    bytes: report.bytes.len(),
                },
                flags.format,
            )
        }
    }
}

fn audit_row(audit: Audit, projects: &IdIndex<Project>) -> AuditRow {
    AuditRow {
        project: projects.name_of(audit.project_id),
        id: audit.id,
        name: audit.name,
        standard: audit.standard,
        status: audit.status,
        audit_date: audit.audit_date,
        created_at: audit.created_at,
    }
}

/// Where to write a downloaded report: an explicit file, a file inside an
/// existing directory, or the server file name in the working directory.
fn export_path(target: Option<&Path>, server_name: &str) -> PathBuf {
    match target {
        Some(dir) if dir.is_dir() => dir.join(server_name),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(server_name),
    }
}
