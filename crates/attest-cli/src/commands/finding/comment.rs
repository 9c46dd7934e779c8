use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(action: &CommentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { finding_id } => {
            output(&ctx.api.list_comments(*finding_id).await?, flags.format)
        }
        CommentCommands::Add { finding_id, text } => {
            if text.trim().is_empty() {
                anyhow::bail!("comment text is empty");
            }
            output(&ctx.api.create_comment(*finding_id, text).await?, flags.format)
        }
        CommentCommands::Delete { id } => {
            ctx.api.delete_comment(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
    }
}
