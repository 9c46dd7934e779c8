//! # attest-core
//!
//! Core types shared by every Attest crate.
//!
//! - Entity structs for the backend resources (organizations, projects,
//!   audits, findings, templates, users, notifications, activity, analytics)
//! - Closed enums (roles, standards, severities, statuses, notification kinds)
//! - Cross-cutting error types
//! - The display-language catalog used by rendering and error fallbacks
//! - Client-side finding/audit filters, due-date classification and
//!   dashboard aggregation
//! - Role-based section visibility
//! - Typed id lookup maps for cross-resource joins
//! - Lenient timestamp serde helpers

pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod i18n;
pub mod lookup;
pub mod nav;
pub mod serde_time;

pub use errors::CoreError;
pub use i18n::Locale;
