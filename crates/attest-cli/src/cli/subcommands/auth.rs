use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    pub email: String,
    /// Password. Read from stdin when omitted.
    #[arg(long, env = "ATTEST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
