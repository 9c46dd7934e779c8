use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

/// Dashboard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DashboardCommands {
    /// Show the visible dashboard cards.
    Show {
        #[arg(long)]
        project: Option<i64>,
    },
    /// Findings created per day.
    Timeline {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        project: Option<i64>,
    },
    /// Card visibility and order.
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CardCommands {
    /// List cards in display order.
    List,
    /// Show or hide a card.
    Toggle { id: String },
    /// Move a card one position.
    Move { id: String, direction: DirectionArg },
    /// Restore the default layout.
    Reset,
}
