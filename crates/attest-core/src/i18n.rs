//! Display-language catalog.
//!
//! The backend writes notification text and error details in Turkish. The
//! client renders in either Turkish or English using the keyed tables below.
//! Keys are dotted paths (`notifications.finding_assigned.title`,
//! `status.in_progress`). Placeholders use `{name}` and are filled by
//! [`interpolate`].

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A supported display language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    /// Look up `key`. Returns `None` when the key is not in the catalog.
    #[must_use]
    pub fn text(self, key: &str) -> Option<&'static str> {
        let table = match self {
            Self::Tr => TR,
            Self::En => EN,
        };
        table
            .iter()
            .find_map(|(k, v)| if *k == key { Some(*v) } else { None })
    }

    /// Look up `key`, falling back to `fallback` when the key is missing.
    #[must_use]
    pub fn text_or<'a>(self, key: &str, fallback: &'a str) -> &'a str {
        self.text(key).unwrap_or(fallback)
    }

    /// Localized label for a finding or audit status wire value. Unknown
    /// values are returned unchanged.
    #[must_use]
    pub fn status_label<'a>(self, value: &'a str) -> &'a str {
        let key = format!("status.{value}");
        self.text(&key).unwrap_or(value)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Accepts `tr`, `en`, and region-tagged forms such as `en-US`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "tr" => Ok(Self::Tr),
            "en" => Ok(Self::En),
            _ => Err(CoreError::Validation(format!(
                "unsupported language '{raw}' (expected tr or en)"
            ))),
        }
    }
}

/// Replace each `{name}` in `template` with its value from `vars`.
///
/// Single left-to-right pass over `template`: inserted values are copied
/// verbatim and never scanned again. Placeholders without a matching var
/// are left as-is.
#[must_use]
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

type Table = &'static [(&'static str, &'static str)];

const TR: Table = &[
    // notifications
    ("notifications.finding_assigned.title", "Bulgu Atandı"),
    ("notifications.finding_assigned.message", "\"{title}\" bulgusu size atandı"),
    ("notifications.finding_due_soon.title", "Bulgu Yakında Son Tarih"),
    (
        "notifications.finding_due_soon.message",
        "\"{title}\" bulgusunun son tarihine {days} gün kaldı",
    ),
    ("notifications.finding_overdue.title", "Bulgu Son Tarih Geçti"),
    (
        "notifications.finding_overdue.message",
        "\"{title}\" bulgusunun son tarihi {days} gün önce geçti",
    ),
    ("notifications.finding_status_changed.title", "Bulgu Durumu Değişti"),
    (
        "notifications.finding_status_changed.message",
        "\"{title}\" bulgusunun durumu \"{status}\" olarak güncellendi",
    ),
    ("notifications.comment_added.title", "Bulguya Yorum Eklendi"),
    ("notifications.comment_added.message", "\"{title}\" bulgusuna yorum eklendi"),
    ("notifications.audit_status_changed.title", "Denetim Durumu Değişti"),
    (
        "notifications.audit_status_changed.message",
        "\"{title}\" denetiminin durumu \"{status}\" olarak güncellendi",
    ),
    // statuses
    ("status.open", "Açık"),
    ("status.in_progress", "Devam Ediyor"),
    ("status.resolved", "Çözüldü"),
    ("status.closed", "Kapatıldı"),
    ("status.planning", "Planlama"),
    ("status.completed", "Tamamlandı"),
    ("status.cancelled", "İptal Edildi"),
    // severities
    ("severity.critical", "Kritik"),
    ("severity.high", "Yüksek"),
    ("severity.medium", "Orta"),
    ("severity.low", "Düşük"),
    ("severity.info", "Bilgi"),
    // dashboard cards
    ("dashboard.cards.stats_projects", "Projeler"),
    ("dashboard.cards.stats_audits", "Denetimler"),
    ("dashboard.cards.stats_open_findings", "Açık Bulgular"),
    ("dashboard.cards.stats_templates", "Şablonlar"),
    ("dashboard.cards.severity_distribution", "Bulgu Dağılımı - Önem"),
    ("dashboard.cards.status_distribution", "Bulgu Dağılımı - Durum"),
    ("dashboard.cards.urgent_findings", "Acil Bulgular"),
    ("dashboard.cards.recent_audits", "Son Denetimler"),
    // errors
    (
        "errors.unreachable",
        "Sunucuya bağlanılamadı. Lütfen backend'in çalıştığından emin olun.",
    ),
    (
        "errors.no_response",
        "Sunucudan yanıt alınamadı. Lütfen network bağlantınızı kontrol edin.",
    ),
    ("errors.generic", "Beklenmeyen bir hata oluştu."),
    ("errors.token_missing", "Token alınamadı"),
    ("errors.user_missing", "Kullanıcı bilgileri alınamadı"),
    ("errors.unauthorized", "Oturum sona erdi. Lütfen tekrar giriş yapın."),
];

const EN: Table = &[
    // notifications
    ("notifications.finding_assigned.title", "Finding Assigned"),
    (
        "notifications.finding_assigned.message",
        "Finding \"{title}\" has been assigned to you",
    ),
    ("notifications.finding_due_soon.title", "Finding Due Soon"),
    (
        "notifications.finding_due_soon.message",
        "Finding \"{title}\" is due in {days} days",
    ),
    ("notifications.finding_overdue.title", "Finding Overdue"),
    (
        "notifications.finding_overdue.message",
        "Finding \"{title}\" is {days} days overdue",
    ),
    ("notifications.finding_status_changed.title", "Finding Status Changed"),
    (
        "notifications.finding_status_changed.message",
        "Status of finding \"{title}\" changed to \"{status}\"",
    ),
    ("notifications.comment_added.title", "Comment Added"),
    (
        "notifications.comment_added.message",
        "A comment was added to finding \"{title}\"",
    ),
    ("notifications.audit_status_changed.title", "Audit Status Changed"),
    (
        "notifications.audit_status_changed.message",
        "Status of audit \"{title}\" changed to \"{status}\"",
    ),
    // statuses
    ("status.open", "Open"),
    ("status.in_progress", "In Progress"),
    ("status.resolved", "Resolved"),
    ("status.closed", "Closed"),
    ("status.planning", "Planning"),
    ("status.completed", "Completed"),
    ("status.cancelled", "Cancelled"),
    // severities
    ("severity.critical", "Critical"),
    ("severity.high", "High"),
    ("severity.medium", "Medium"),
    ("severity.low", "Low"),
    ("severity.info", "Info"),
    // dashboard cards
    ("dashboard.cards.stats_projects", "Projects"),
    ("dashboard.cards.stats_audits", "Audits"),
    ("dashboard.cards.stats_open_findings", "Open Findings"),
    ("dashboard.cards.stats_templates", "Templates"),
    ("dashboard.cards.severity_distribution", "Findings by Severity"),
    ("dashboard.cards.status_distribution", "Findings by Status"),
    ("dashboard.cards.urgent_findings", "Urgent Findings"),
    ("dashboard.cards.recent_audits", "Recent Audits"),
    // errors
    (
        "errors.unreachable",
        "Could not connect to the server. Make sure the backend is running.",
    ),
    (
        "errors.no_response",
        "No response from the server. Check your network connection.",
    ),
    ("errors.generic", "An unexpected error occurred."),
    ("errors.token_missing", "No access token received"),
    ("errors.user_missing", "Could not load user details"),
    ("errors.unauthorized", "Session expired. Please log in again."),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn both_tables_define_the_same_keys() {
        let mut tr: Vec<&str> = TR.iter().map(|(k, _)| *k).collect();
        let mut en: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
        tr.sort_unstable();
        en.sort_unstable();
        assert_eq!(tr, en);
    }

    #[test]
    fn status_label_falls_back_to_raw_value() {
        assert_eq!(Locale::En.status_label("in_progress"), "In Progress");
        assert_eq!(Locale::Tr.status_label("resolved"), "Çözüldü");
        assert_eq!(Locale::En.status_label("archived"), "archived");
    }

    #[test]
    fn interpolate_fills_known_placeholders_only() {
        let out = interpolate("{title} in {days} days ({missing})", &[
            ("title", "MFA"),
            ("days", "3"),
        ]);
        assert_eq!(out, "MFA in 3 days ({missing})");
    }

    #[test]
    fn interpolated_values_are_not_rescanned() {
        let out = interpolate("\"{title}\" is due in {days} days", &[
            ("title", "Rotate {days} keys"),
            ("days", "5"),
        ]);
        assert_eq!(out, "\"Rotate {days} keys\" is due in 5 days");
    }

    #[test]
    fn unclosed_brace_is_copied() {
        assert_eq!(interpolate("{title", &[("title", "x")]), "{title");
        assert_eq!(interpolate("a {b {title}", &[("title", "x")]), "a {b x");
    }

    #[test]
    fn locale_parses_region_tags() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("TR".parse::<Locale>().unwrap(), Locale::Tr);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn locale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }
}
