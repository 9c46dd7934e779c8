//! # attest-notify
//!
//! Localized rendering of notification records.
//!
//! The backend stores notification `title`/`message` already formatted in
//! Turkish, with entity names in double quotes and day counts in
//! parentheses:
//!
//! ```text
//! "MFA not enforced" bulgusu yakında son tarih (2 gün kaldı)
//! "Q2 ISO review" denetiminin durumu "completed" olarak güncellendi
//! ```
//!
//! [`render`] pulls those values back out with regexes and refills the
//! locale's template for the notification kind. When extraction fails the
//! stored text is shown unchanged.
//!
//! This is a compatibility shim: it breaks as soon as the backend wording
//! changes. The backend should send the values as structured fields instead.

use std::sync::OnceLock;

use attest_core::entities::Notification;
use attest_core::enums::NotificationType;
use attest_core::i18n::{Locale, interpolate};
use regex::Regex;
use serde::Serialize;

/// Display strings for one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotification {
    pub title: String,
    pub message: String,
    /// `false` when the stored text was passed through unchanged.
    pub localized: bool,
}

impl RenderedNotification {
    fn stored(notification: &Notification) -> Self {
        Self {
            title: notification.title.clone(),
            message: notification.message.clone(),
            localized: false,
        }
    }
}

/// Render `notification` for `locale`. Pure; never panics.
#[must_use]
pub fn render(notification: &Notification, locale: Locale) -> RenderedNotification {
    let kind = notification.kind;
    if kind == NotificationType::Unknown {
        return RenderedNotification::stored(notification);
    }

    let quoted = extract_quoted(&notification.message);
    let Some(entity_title) = quoted.first().filter(|t| !t.is_empty()) else {
        return RenderedNotification::stored(notification);
    };

    let extra = match kind {
        NotificationType::FindingDueSoon => Some(("days", extract_days_left(&notification.message))),
        NotificationType::FindingOverdue => {
            Some(("days", extract_days_overdue(&notification.message)))
        }
        NotificationType::FindingStatusChanged | NotificationType::AuditStatusChanged => {
            let Some(raw_status) = quoted.get(1) else {
                return RenderedNotification::stored(notification);
            };
            Some(("status", locale.status_label(raw_status).to_string()))
        }
        _ => None,
    };

    let mut vars: Vec<(&str, &str)> = vec![("title", entity_title.as_str())];
    if let Some((name, value)) = &extra {
        vars.push((*name, value.as_str()));
    }

    let prefix = format!("notifications.{}", kind.as_str());
    let (Some(title), Some(template)) = (
        locale.text(&format!("{prefix}.title")),
        locale.text(&format!("{prefix}.message")),
    ) else {
        return RenderedNotification::stored(notification);
    };

    RenderedNotification {
        title: title.to_string(),
        message: interpolate(template, &vars),
        localized: true,
    }
}

/// All double-quoted substrings of `message`, in order, without the quotes.
#[must_use]
pub fn extract_quoted(message: &str) -> Vec<String> {
    let Some(re) = quoted_regex() else {
        return Vec::new();
    };
    re.captures_iter(message)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Day count from `(N gün kaldı)`, or `"0"`.
#[must_use]
pub fn extract_days_left(message: &str) -> String {
    capture_digits(days_left_regex(), message)
}

/// Day count from `(N gün)`, or `"0"`.
#[must_use]
pub fn extract_days_overdue(message: &str) -> String {
    capture_digits(days_overdue_regex(), message)
}

fn capture_digits(re: Option<&Regex>, message: &str) -> String {
    re.and_then(|re| re.captures(message))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "0".to_string(), |m| m.as_str().to_string())
}

fn quoted_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).ok()).as_ref()
}

fn days_left_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\d+)\s*gün kaldı\)").ok())
        .as_ref()
}

fn days_overdue_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\d+)\s*gün\)").ok()).as_ref()
}

// ---------------------------------------------------------------------------
// Link target
// ---------------------------------------------------------------------------

/// The resource a notification points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "entity", content = "id", rename_all = "snake_case")]
pub enum LinkTarget {
    Finding(i64),
    Audit(i64),
}

impl LinkTarget {
    /// CLI command that shows the target.
    #[must_use]
    pub fn command_hint(self) -> String {
        match self {
            Self::Finding(id) => format!("attest finding get {id}"),
            Self::Audit(id) => format!("attest audit get {id}"),
        }
    }
}

/// Resolve the related entity, if it is one the client can show.
#[must_use]
pub fn link_target(notification: &Notification) -> Option<LinkTarget> {
    let id = notification.related_entity_id?;
    match notification.related_entity_type.as_deref()? {
        "finding" => Some(LinkTarget::Finding(id)),
        "audit" => Some(LinkTarget::Audit(id)),
        _ => None,
    }
}
