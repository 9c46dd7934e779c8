use attest_core::entities::{OrganizationCreate, OrganizationUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrganizationCommands;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest organization`.
pub async fn handle(
    action: &OrganizationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        OrganizationCommands::List => output(&ctx.api.list_organizations().await?, flags.format),
        OrganizationCommands::Get { id } => {
            output(&ctx.api.get_organization(*id).await?, flags.format)
        }
        OrganizationCommands::Create {
            name,
            description,
            logo_url,
        } => {
            let data = OrganizationCreate {
                name: name.clone(),
                description: description.clone(),
                logo_url: logo_url.clone(),
            };
            output(&ctx.api.create_organization(&data).await?, flags.format)
        }
        OrganizationCommands::Update {
            id,
            name,
            description,
            logo_url,
            active,
        } => {
            let data = OrganizationUpdate {
                name: name.clone(),
                description: description.clone(),
                logo_url: logo_url.clone(),
                is_active: *active,
            };
            output(&ctx.api.update_organization(*id, &data).await?, flags.format)
        }
        OrganizationCommands::Delete { id } => {
            ctx.api.delete_organization(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
    }
}
