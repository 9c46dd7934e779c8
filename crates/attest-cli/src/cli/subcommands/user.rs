use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        #[arg(long)]
        organization: Option<i64>,
    },
    /// Get a user by ID.
    Get { id: i64 },
    /// Create a user.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// platform_admin, org_admin, auditor
        #[arg(long)]
        role: String,
        #[arg(long, env = "ATTEST_NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        organization: Option<i64>,
        #[arg(long)]
        inactive: bool,
    },
    /// Update a user.
    Update {
        id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        organization: Option<i64>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a user.
    Delete { id: i64 },
    /// Change the current user's password.
    Passwd {
        #[arg(long, env = "ATTEST_PASSWORD", hide_env_values = true)]
        current: String,
        #[arg(long, env = "ATTEST_NEW_PASSWORD", hide_env_values = true)]
        new: String,
    },
}
