use attest_core::entities::{FindingCreate, FindingUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FindingCommands;
use crate::commands::shared::parse::{parse_enum, parse_opt_date, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// `finding create` and `finding update`.
pub async fn run(action: &FindingCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FindingCommands::Create {
            audit,
            title,
            severity,
            status,
            description,
            control,
            recommendation,
            assign,
            due,
        } => {
            let data = FindingCreate {
                audit_id: *audit,
                title: title.clone(),
                description: description.clone(),
                control_reference: control.clone(),
                severity: parse_enum(severity, "severity")?,
                status: parse_enum(status, "status")?,
                recommendation: recommendation.clone(),
                assigned_to_user_id: *assign,
                due_date: parse_opt_date(due.as_deref(), "due")?,
            };
            output(&ctx.api.create_finding(&data).await?, flags.format)
        }
        FindingCommands::Update {
            id,
            title,
            severity,
            status,
            description,
            control,
            recommendation,
            assign,
            due,
        } => {
            let data = FindingUpdate {
                title: title.clone(),
                description: description.clone(),
                control_reference: control.clone(),
                severity: parse_opt_enum(severity.as_deref(), "severity")?,
                status: parse_opt_enum(status.as_deref(), "status")?,
                recommendation: recommendation.clone(),
                assigned_to_user_id: *assign,
                due_date: parse_opt_date(due.as_deref(), "due")?,
            };
            if data == FindingUpdate::default() {
                anyhow::bail!("finding update: nothing to change");
            }
            output(&ctx.api.update_finding(*id, &data).await?, flags.format)
        }
        _ => unreachable!("only create/update are routed here"),
    }
}
