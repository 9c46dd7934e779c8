use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

/// Due-date filter for `finding list`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DueArg {
    Overdue,
    DueSoon,
}

/// Finding commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FindingCommands {
    /// List findings.
    List {
        #[arg(long)]
        audit: Option<i64>,
        #[arg(long)]
        assigned_to: Option<i64>,
        /// Only findings assigned to the current user.
        #[arg(long, conflicts_with = "assigned_to")]
        mine: bool,
        /// all, active, resolved, open, in_progress, closed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        due: Option<DueArg>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a finding by ID.
    Get { id: i64 },
    /// Create a finding.
    Create {
        #[arg(long)]
        audit: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        severity: String,
        #[arg(long, default_value = "open")]
        status: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        control: Option<String>,
        #[arg(long)]
        recommendation: Option<String>,
        #[arg(long)]
        assign: Option<i64>,
        /// YYYY-MM-DD or RFC 3339.
        #[arg(long)]
        due: Option<String>,
    },
    /// Update a finding.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        control: Option<String>,
        #[arg(long)]
        recommendation: Option<String>,
        #[arg(long)]
        assign: Option<i64>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a finding.
    Delete { id: i64 },
    /// Evidence files.
    Evidence {
        #[command(subcommand)]
        action: EvidenceCommands,
    },
    /// Comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum EvidenceCommands {
    /// Upload a file as evidence.
    Upload {
        finding_id: i64,
        path: PathBuf,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an evidence file.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// List comments on a finding.
    List { finding_id: i64 },
    /// Add a comment.
    Add { finding_id: i64, text: String },
    /// Delete a comment.
    Delete { id: i64 },
}
