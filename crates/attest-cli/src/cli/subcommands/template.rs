use clap::{Args, Subcommand};

/// Template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TemplateCommands {
    /// List templates visible to the current user.
    List {
        #[arg(long)]
        organization: Option<i64>,
    },
    /// Get a template with its items.
    Get { id: i64 },
    /// Create an empty template.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        standard: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        organization: Option<i64>,
    },
    /// Update a template.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        standard: Option<String>,
    },
    /// Delete a template.
    Delete { id: i64 },
    /// Copy a template (system templates included).
    Copy {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        organization: Option<i64>,
    },
    /// Template items.
    Item {
        #[command(subcommand)]
        action: TemplateItemCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum TemplateItemCommands {
    /// Add an item to a template.
    Add {
        template_id: i64,
        #[command(flatten)]
        item: TemplateItemArgs,
    },
    /// Replace an item.
    Update {
        item_id: i64,
        /// Template that owns the item.
        #[arg(long)]
        template: i64,
        #[command(flatten)]
        item: TemplateItemArgs,
    },
    /// Delete an item.
    Delete {
        item_id: i64,
        /// Template that owns the item.
        #[arg(long)]
        template: i64,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TemplateItemArgs {
    #[arg(long)]
    pub order: i32,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub severity: String,
    #[arg(long, default_value = "open")]
    pub status: String,
    #[arg(long)]
    pub control: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub recommendation: Option<String>,
}
