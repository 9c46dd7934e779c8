use attest_core::Locale;
use attest_prefs::{DashboardCard, Direction, PreferenceStorage};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CardCommands, DirectionArg};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CardRow {
    order: u32,
    id: String,
    name: String,
    visible: bool,
}

impl CardRow {
    fn new(card: &DashboardCard, locale: Locale) -> Self {
        Self {
            order: card.order,
            id: card.id.clone(),
            name: card_title(card, locale).to_string(),
            visible: card.visible,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => Self::Up,
            DirectionArg::Down => Self::Down,
        }
    }
}

/// Card heading in the display language; the stored name is the fallback.
pub fn card_title(card: &DashboardCard, locale: Locale) -> &str {
    locale.text_or(&format!("dashboard.cards.{}", card.id), &card.name)
}

pub fn run(action: &CardCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut prefs = ctx.card_preferences()?;
    match action {
        CardCommands::List => {}
        CardCommands::Toggle { id } => {
            if !prefs.toggle_visibility(id)? {
                tracing::warn!(card = %id, "unknown dashboard card; nothing changed");
            }
        }
        CardCommands::Move { id, direction } => {
            if !prefs.move_card(id, (*direction).into())? {
                tracing::warn!(card = %id, ?direction, "card cannot move that way; nothing changed");
            }
        }
        CardCommands::Reset => prefs.reset()?,
    }
    output(&rows(prefs.cards(), ctx.locale), flags.format)
}

fn rows(cards: &[DashboardCard], locale: Locale) -> Vec<CardRow> {
    cards.iter().map(|card| CardRow::new(card, locale)).collect()
}

/// Cards the dashboard should render, in display order.
pub fn visible<S: PreferenceStorage>(prefs: &attest_prefs::CardPreferences<S>) -> Vec<DashboardCard> {
    prefs.visible_cards().cloned().collect()
}

#[cfg(test)]
mod tests {
    use attest_core::Locale;
    use attest_prefs::{CardPreferences, MemoryStorage, default_cards};
    use pretty_assertions::assert_eq;

    use super::{card_title, rows, visible};

    #[test]
    fn titles_follow_locale() {
        let cards = default_cards();
        assert_eq!(card_title(&cards[0], Locale::En), "Projects");
        assert_eq!(card_title(&cards[0], Locale::Tr), "Projeler");
    }

    #[test]
    fn rows_keep_order() {
        let cards = default_cards();
        let rows = rows(&cards, Locale::En);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].id, "stats_projects");
        assert_eq!(rows[7].name, "Recent Audits");
    }

    #[test]
    fn hidden_cards_are_skipped() {
        let mut prefs = CardPreferences::load(MemoryStorage::default()).unwrap();
        prefs.toggle_visibility("stats_templates").unwrap();
        let ids: Vec<String> = visible(&prefs).into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 7);
        assert!(!ids.iter().any(|id| id == "stats_templates"));
    }
}
