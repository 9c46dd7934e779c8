use attest_core::entities::{Template, TemplateItemInput};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TemplateItemArgs, TemplateItemCommands};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

use super::load_editable;

pub async fn run(action: &TemplateItemCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TemplateItemCommands::Add { template_id, item } => {
            load_editable(ctx, *template_id).await?;
            let data = item_input(item)?;
            output(&ctx.api.create_template_item(*template_id, &data).await?, flags.format)
        }
        TemplateItemCommands::Update {
            item_id,
            template,
            item,
        } => {
            let owner = load_editable(ctx, *template).await?;
            ensure_owned(&owner, *item_id)?;
            let data = item_input(item)?;
            output(&ctx.api.update_template_item(*item_id, &data).await?, flags.format)
        }
        TemplateItemCommands::Delete { item_id, template } => {
            let owner = load_editable(ctx, *template).await?;
            ensure_owned(&owner, *item_id)?;
            ctx.api.delete_template_item(*item_id).await?;
            output(&DeletedResponse::new(*item_id), flags.format)
        }
    }
}

fn item_input(args: &TemplateItemArgs) -> anyhow::Result<TemplateItemInput> {
    Ok(TemplateItemInput {
        order_number: args.order,
        control_reference: args.control.clone(),
        default_title: args.title.clone(),
        default_description: args.description.clone(),
        default_severity: parse_enum(&args.severity, "severity")?,
        default_status: parse_enum(&args.status, "status")?,
        default_recommendation: args.recommendation.clone(),
    })
}

/// The `--template` id must be the item's real owner, otherwise the
/// read-only check would be run against the wrong template.
fn ensure_owned(template: &Template, item_id: i64) -> anyhow::Result<()> {
    if template.items.iter().any(|item| item.id == item_id) {
        Ok(())
    } else {
        anyhow::bail!("item {item_id} does not belong to template {}", template.id)
    }
}

#[cfg(test)]
mod tests {
    use attest_core::enums::{FindingStatus, Severity};

    use super::item_input;
    use crate::cli::subcommands::TemplateItemArgs;

    fn args(severity: &str) -> TemplateItemArgs {
        TemplateItemArgs {
            order: 2,
            title: "Access reviews".into(),
            severity: severity.into(),
            status: "open".into(),
            control: Some("A.9.2.5".into()),
            description: None,
            recommendation: None,
        }
    }

    #[test]
    fn item_args_become_input() {
        let input = item_input(&args("high")).unwrap();
        assert_eq!(input.order_number, 2);
        assert_eq!(input.default_severity, Severity::High);
        assert_eq!(input.default_status, FindingStatus::Open);
        assert_eq!(input.control_reference.as_deref(), Some("A.9.2.5"));
    }

    #[test]
    fn bad_severity_is_rejected() {
        assert!(item_input(&args("urgent")).is_err());
    }
}
