use attest_core::entities::{Organization, Project, ProjectCreate, ProjectUpdate};
use attest_core::lookup::IdIndex;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectRow {
    id: i64,
    name: String,
    organization: String,
    is_active: bool,
    users: usize,
}

/// Handle `attest project`.
pub async fn handle(action: &ProjectCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        ProjectCommands::List { organization } => {
            let projects = ctx.api.list_projects(*organization).await?;
            let organizations = match ctx.api.list_organizations().await {
                Ok(orgs) => IdIndex::build(orgs),
                Err(error) => {
                    tracing::debug!(%error, "organization names unavailable");
                    IdIndex::build(Vec::new())
                }
            };
            let rows = projects
                .into_iter()
                .map(|project| project_row(project, &organizations))
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        ProjectCommands::Get { id } => output(&ctx.api.get_project(*id).await?, flags.format),
        ProjectCommands::Create {
            name,
            organization,
            description,
            users,
        } => {
            let data = ProjectCreate {
                name: name.clone(),
                description: description.clone(),
                organization_id: *organization,
                user_ids: users.clone(),
            };
            output(&ctx.api.create_project(&data).await?, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            active,
            users,
        } => {
            let data = ProjectUpdate {
                name: name.clone(),
                description: description.clone(),
                is_active: *active,
                user_ids: (!users.is_empty()).then(|| users.clone()),
            };
            output(&ctx.api.update_project(*id, &data).await?, flags.format)
        }
        ProjectCommands::Delete { id } => {
            ctx.api.delete_project(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
        ProjectCommands::Copy { id, name } => {
            output(&ctx.api.copy_project(*id, name).await?, flags.format)
        }
    }
}

fn project_row(project: Project, organizations: &IdIndex<Organization>) -> ProjectRow {
    ProjectRow {
        organization: organizations.name_of(project.organization_id),
        users: project.user_ids.len(),
        id: project.id,
        name: project.name,
        is_active: project.is_active,
    }
}
