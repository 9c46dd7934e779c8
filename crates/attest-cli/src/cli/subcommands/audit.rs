use std::path::PathBuf;

use clap::Subcommand;

/// Audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List audits, newest first.
    List {
        #[arg(long)]
        project: Option<i64>,
        /// planning, in_progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an audit by ID.
    Get { id: i64 },
    /// Create an audit, optionally seeded from a template.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        project: i64,
        /// Standard code, e.g. ISO27001, pci-dss.
        #[arg(long)]
        standard: String,
        #[arg(long)]
        description: Option<String>,
        /// YYYY-MM-DD or RFC 3339.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        template: Option<i64>,
    },
    /// Update an audit.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        standard: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an audit.
    Delete { id: i64 },
    /// Copy an audit with its findings.
    Copy {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Download the Word report.
    Export {
        id: i64,
        /// Output file or directory (defaults to the server file name).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}
