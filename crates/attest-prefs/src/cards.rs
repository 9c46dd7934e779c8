//! Dashboard card visibility and ordering.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PrefsError;
use crate::storage::PreferenceStorage;

/// Slot that holds the serialized card array.
pub const STORAGE_KEY: &str = "dashboard_cards_preferences";

/// Order reported for ids outside the catalog.
pub const UNKNOWN_ORDER: u32 = 999;

/// Card ids and default display names, in default order.
pub const CARD_CATALOG: [(&str, &str); 8] = [
    ("stats_projects", "Projeler"),
    ("stats_audits", "Denetimler"),
    ("stats_open_findings", "Açık Bulgular"),
    ("stats_templates", "Şablonlar"),
    ("severity_distribution", "Bulgu Dağılımı - Önem"),
    ("status_distribution", "Bulgu Dağılımı - Durum"),
    ("urgent_findings", "Acil Bulgular"),
    ("recent_audits", "Son Denetimler"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardCard {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub order: u32,
}

/// All catalog cards, visible, ordered 1..N.
#[must_use]
pub fn default_cards() -> Vec<DashboardCard> {
    CARD_CATALOG
        .iter()
        .zip(1..)
        .map(|((id, name), order)| DashboardCard {
            id: (*id).to_string(),
            name: (*name).to_string(),
            visible: true,
            order,
        })
        .collect()
}

/// Whether `id` names a catalog card.
#[must_use]
pub fn is_known_card(id: &str) -> bool {
    CARD_CATALOG.iter().any(|(known, _)| *known == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// Repair a stored card array.
///
/// Unknown and duplicate ids are dropped (first occurrence wins), missing
/// catalog cards are appended as visible, and orders are renumbered 1..N
/// keeping the stored relative order.
#[must_use]
pub fn normalize(stored: Vec<DashboardCard>) -> Vec<DashboardCard> {
    let mut seen = HashSet::new();
    let mut cards: Vec<DashboardCard> = stored
        .into_iter()
        .filter(|card| is_known_card(&card.id) && seen.insert(card.id.clone()))
        .collect();
    cards.sort_by_key(|card| card.order);

    for card in default_cards() {
        if !seen.contains(&card.id) {
            cards.push(card);
        }
    }

    for (card, order) in cards.iter_mut().zip(1..) {
        card.order = order;
    }
    cards
}

/// Card preferences bound to a storage slot.
///
/// `cards` is kept sorted by `order`. Every effective mutation rewrites the
/// whole array; no-ops write nothing.
#[derive(Debug)]
pub struct CardPreferences<S> {
    storage: S,
    cards: Vec<DashboardCard>,
}

impl<S: PreferenceStorage> CardPreferences<S> {
    /// Load preferences from `storage`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the slot exists but cannot be read. A
    /// blob that does not parse is not an error.
    pub fn load(storage: S) -> Result<Self, PrefsError> {
        let cards = match storage.get(STORAGE_KEY)? {
            None => default_cards(),
            Some(raw) => match serde_json::from_str::<Vec<DashboardCard>>(&raw) {
                Ok(stored) => normalize(stored),
                Err(error) => {
                    tracing::warn!(%error, "ignoring unreadable dashboard preferences");
                    default_cards()
                }
            },
        };
        Ok(Self { storage, cards })
    }

    /// Cards sorted by order.
    #[must_use]
    pub fn cards(&self) -> &[DashboardCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &DashboardCard> {
        self.cards.iter().filter(|card| card.visible)
    }

    /// Unknown ids count as visible.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.find(id).is_none_or(|card| card.visible)
    }

    #[must_use]
    pub fn order_of(&self, id: &str) -> u32 {
        self.find(id).map_or(UNKNOWN_ORDER, |card| card.order)
    }

    /// Flip a card's visibility. Returns `false` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the change cannot be persisted; the
    /// in-memory cards are left unchanged.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, PrefsError> {
        let Some(index) = self.cards.iter().position(|card| card.id == id) else {
            return Ok(false);
        };
        let mut next = self.cards.clone();
        next[index].visible = !next[index].visible;
        self.commit(next)?;
        Ok(true)
    }

    /// Swap a card's order with its neighbour. Returns `false` when nothing
    /// moved: unknown id, first card up, last card down.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the change cannot be persisted; the
    /// in-memory cards are left unchanged.
    pub fn move_card(&mut self, id: &str, direction: Direction) -> Result<bool, PrefsError> {
        let Some(index) = self.cards.iter().position(|card| card.id == id) else {
            return Ok(false);
        };
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&next| next < self.cards.len()),
        };
        let Some(neighbour) = neighbour else {
            return Ok(false);
        };

        let mut next = self.cards.clone();
        let order = next[index].order;
        next[index].order = next[neighbour].order;
        next[neighbour].order = order;
        next.sort_by_key(|card| card.order);

        self.commit(next)?;
        Ok(true)
    }

    /// Restore the defaults and drop the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the slot cannot be removed; the
    /// in-memory cards are left unchanged.
    pub fn reset(&mut self) -> Result<(), PrefsError> {
        self.storage.remove(STORAGE_KEY)?;
        self.cards = default_cards();
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&DashboardCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Write `next` first; memory only follows a successful write.
    fn commit(&mut self, next: Vec<DashboardCard>) -> Result<(), PrefsError> {
        let blob = serde_json::to_string(&next)?;
        self.storage.set(STORAGE_KEY, &blob)?;
        self.cards = next;
        Ok(())
    }
}
