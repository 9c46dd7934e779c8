use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ActivityCommands, AuditCommands, AuthCommands, DashboardCommands, FindingCommands,
    NotificationCommands, OrganizationCommands, ProjectCommands, TemplateCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Organizations (platform admins).
    Organization {
        #[command(subcommand)]
        action: OrganizationCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Audits.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Findings, evidence and comments.
    Finding {
        #[command(subcommand)]
        action: FindingCommands,
    },
    /// Audit templates and their items.
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Notifications for the current user.
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Activity log.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Dashboard and card preferences.
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `attest schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `finding`, `audit`, `dashboard-stats`.
    pub type_name: String,
}
