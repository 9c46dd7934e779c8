mod comment;
mod evidence;
mod list;
mod write;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FindingCommands;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest finding`.
pub async fn handle(action: &FindingCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        FindingCommands::List {
            audit,
            assigned_to,
            mine,
            status,
            severity,
            due,
            limit,
        } => {
            let filters = list::ListFilters {
                audit: *audit,
                assigned_to: *assigned_to,
                mine: *mine,
                status: status.as_deref(),
                severity: severity.as_deref(),
                due: *due,
                limit: ctx.limit(*limit, flags),
            };
            list::run(&filters, ctx, flags).await
        }
        FindingCommands::Get { id } => output(&ctx.api.get_finding(*id).await?, flags.format),
        FindingCommands::Create { .. } | FindingCommands::Update { .. } => {
            write::run(action, ctx, flags).await
        }
        FindingCommands::Delete { id } => {
            ctx.api.delete_finding(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
        FindingCommands::Evidence { action } => evidence::run(action, ctx, flags).await,
        FindingCommands::Comment { action } => comment::run(action, ctx, flags).await,
    }
}
