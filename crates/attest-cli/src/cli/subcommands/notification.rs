use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ReadFilterArg {
    #[default]
    All,
    Unread,
    Read,
}

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications, rendered in the display language.
    List {
        #[arg(long, value_enum, default_value_t = ReadFilterArg::All)]
        filter: ReadFilterArg,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Number of unread notifications.
    Count,
    /// Mark one notification read.
    Read { id: i64 },
    /// Mark every notification read.
    ReadAll,
    /// Delete a notification.
    Delete { id: i64 },
}
