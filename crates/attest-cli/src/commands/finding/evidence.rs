use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EvidenceCommands;
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(action: &EvidenceCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EvidenceCommands::Upload {
            finding_id,
            path,
            description,
        } => {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("invalid evidence path {}", path.display()))?
                .to_string();
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read evidence file {}", path.display()))?;
            tracing::debug!(finding_id, %file_name, size = bytes.len(), "uploading evidence");

            let evidence = ctx
                .api
                .upload_evidence(*finding_id, &file_name, bytes, description.as_deref())
                .await?;
            output(&evidence, flags.format)
        }
        EvidenceCommands::Delete { id } => {
            ctx.api.delete_evidence(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
    }
}
