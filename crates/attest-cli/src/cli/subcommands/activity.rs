use clap::Subcommand;

/// Activity log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// List activity with optional filters.
    List {
        #[arg(long)]
        entity_type: Option<String>,
        #[arg(long)]
        entity_id: Option<i64>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        user: Option<i64>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Activity for one entity.
    Entity {
        entity_type: String,
        entity_id: i64,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
