use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List {
        #[arg(long)]
        organization: Option<i64>,
    },
    /// Get a project by ID.
    Get { id: i64 },
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        organization: i64,
        #[arg(long)]
        description: Option<String>,
        /// User to associate; repeatable.
        #[arg(long = "user")]
        users: Vec<i64>,
    },
    /// Update a project.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        /// Replace associated users; repeatable.
        #[arg(long = "user")]
        users: Vec<i64>,
    },
    /// Delete a project.
    Delete { id: i64 },
    /// Copy a project under a new name.
    Copy {
        id: i64,
        #[arg(long)]
        name: String,
    },
}
