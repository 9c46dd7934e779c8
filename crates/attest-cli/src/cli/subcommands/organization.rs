use clap::Subcommand;

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrganizationCommands {
    /// List organizations.
    List,
    /// Get an organization by ID.
    Get { id: i64 },
    /// Create an organization.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
    },
    /// Update an organization.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete an organization.
    Delete { id: i64 },
}
