//! # attest-prefs
//!
//! Client-side dashboard preferences.
//!
//! The dashboard shows a fixed catalog of cards. Users can hide cards and
//! reorder them; [`CardPreferences`] keeps that state and writes it as one
//! JSON array to a [`PreferenceStorage`] slot after every change.

pub mod cards;
pub mod error;
pub mod storage;

pub use cards::{
    CARD_CATALOG, CardPreferences, DashboardCard, Direction, STORAGE_KEY, UNKNOWN_ORDER,
    default_cards,
};
pub use error::PrefsError;
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
