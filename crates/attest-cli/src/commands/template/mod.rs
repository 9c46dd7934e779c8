mod items;

use attest_core::CoreError;
use attest_core::entities::{Template, TemplateCopy, TemplateCreate, TemplateUpdate};
use attest_core::enums::AuditStandard;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateCommands;
use crate::commands::shared::parse::parse_standard;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TemplateRow {
    id: i64,
    name: String,
    standard: AuditStandard,
    is_system: bool,
    organization_id: Option<i64>,
    items: usize,
}

impl From<Template> for TemplateRow {
    fn from(template: Template) -> Self {
        Self {
            items: template.items.len(),
            id: template.id,
            name: template.name,
            standard: template.standard,
            is_system: template.is_system,
            organization_id: template.organization_id,
        }
    }
}

/// Handle `attest template`.
pub async fn handle(action: &TemplateCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    let lang = Some(ctx.locale);
    match action {
        TemplateCommands::List { organization } => {
            let rows = ctx
                .api
                .list_templates(*organization, lang)
                .await?
                .into_iter()
                .map(TemplateRow::from)
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        TemplateCommands::Get { id } => output(&ctx.api.get_template(*id, lang).await?, flags.format),
        TemplateCommands::Create {
            name,
            standard,
            description,
            organization,
        } => {
            let data = TemplateCreate {
                name: name.clone(),
                description: description.clone(),
                standard: parse_standard(standard)?,
                organization_id: *organization,
                items: Vec::new(),
            };
            output(&ctx.api.create_template(&data).await?, flags.format)
        }
        TemplateCommands::Update {
            id,
            name,
            description,
            standard,
        } => {
            load_editable(ctx, *id).await?;
            let data = TemplateUpdate {
                name: name.clone(),
                description: description.clone(),
                standard: standard.as_deref().map(parse_standard).transpose()?,
            };
            output(&ctx.api.update_template(*id, &data).await?, flags.format)
        }
        TemplateCommands::Delete { id } => {
            load_editable(ctx, *id).await?;
            ctx.api.delete_template(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
        TemplateCommands::Copy {
            id,
            name,
            organization,
        } => {
            let data = TemplateCopy {
                new_name: name.clone(),
                organization_id: *organization,
            };
            output(&ctx.api.copy_template(*id, &data).await?, flags.format)
        }
        TemplateCommands::Item { action } => items::run(action, ctx, flags).await,
    }
}

/// Fetch a template and refuse to continue when it is a system template.
pub(crate) async fn load_editable(ctx: &AppContext, id: i64) -> anyhow::Result<Template> {
    let template = ctx.api.get_template(id, Some(ctx.locale)).await?;
    ensure_editable(&template)?;
    Ok(template)
}

fn ensure_editable(template: &Template) -> Result<(), CoreError> {
    if template.is_editable() {
        Ok(())
    } else {
        Err(CoreError::ReadOnly {
            entity_type: "system template".into(),
            id: template.id,
        })
    }
}
