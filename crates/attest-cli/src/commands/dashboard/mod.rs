mod cards;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DashboardCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest dashboard`.
pub async fn handle(
    action: &DashboardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DashboardCommands::Show { project } => {
            ctx.require_auth()?;
            show::run(*project, ctx, flags).await
        }
        DashboardCommands::Timeline { days, project } => {
            ctx.require_auth()?;
            let points = ctx.api.findings_timeline(*days, *project).await?;
            output(&points, flags.format)
        }
        // Card layout is local state; no session needed.
        DashboardCommands::Cards { action } => cards::run(action, ctx, flags),
    }
}
