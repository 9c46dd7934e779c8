//! Closed enumerations used across the Attest data model.
//!
//! Wire names follow the backend exactly. Most enums serialize as
//! `snake_case`; [`AuditStandard`] keeps the backend's upper-case codes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Enforcement happens on the backend; the client only uses it
/// to decide which sections to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PlatformAdmin,
    OrgAdmin,
    Auditor,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlatformAdmin => "platform_admin",
            Self::OrgAdmin => "org_admin",
            Self::Auditor => "auditor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStandard
// ---------------------------------------------------------------------------

/// Compliance framework an audit or template is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AuditStandard {
    #[serde(rename = "ISO27001")]
    Iso27001,
    #[serde(rename = "PCI_DSS")]
    PciDss,
    #[serde(rename = "KVKK")]
    Kvkk,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "NIST")]
    Nist,
    #[serde(rename = "CIS")]
    Cis,
    #[serde(rename = "SOC2")]
    Soc2,
    #[serde(rename = "OWASP_TOP10")]
    OwaspTop10,
    #[serde(rename = "OWASP_ASVS")]
    OwaspAsvs,
    #[serde(rename = "OWASP_API")]
    OwaspApi,
    #[serde(rename = "OWASP_MOBILE")]
    OwaspMobile,
    #[serde(rename = "ISO27017")]
    Iso27017,
    #[serde(rename = "ISO27018")]
    Iso27018,
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "COBIT")]
    Cobit,
    #[serde(rename = "ENISA")]
    Enisa,
    #[serde(rename = "CMMC")]
    Cmmc,
    #[serde(rename = "FEDRAMP")]
    Fedramp,
    #[serde(rename = "ITIL")]
    Itil,
    #[serde(rename = "OTHER")]
    Other,
}

impl AuditStandard {
    pub const ALL: [Self; 20] = [
        Self::Iso27001,
        Self::PciDss,
        Self::Kvkk,
        Self::Gdpr,
        Self::Nist,
        Self::Cis,
        Self::Soc2,
        Self::OwaspTop10,
        Self::OwaspAsvs,
        Self::OwaspApi,
        Self::OwaspMobile,
        Self::Iso27017,
        Self::Iso27018,
        Self::Hipaa,
        Self::Cobit,
        Self::Enisa,
        Self::Cmmc,
        Self::Fedramp,
        Self::Itil,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso27001 => "ISO27001",
            Self::PciDss => "PCI_DSS",
            Self::Kvkk => "KVKK",
            Self::Gdpr => "GDPR",
            Self::Nist => "NIST",
            Self::Cis => "CIS",
            Self::Soc2 => "SOC2",
            Self::OwaspTop10 => "OWASP_TOP10",
            Self::OwaspAsvs => "OWASP_ASVS",
            Self::OwaspApi => "OWASP_API",
            Self::OwaspMobile => "OWASP_MOBILE",
            Self::Iso27017 => "ISO27017",
            Self::Iso27018 => "ISO27018",
            Self::Hipaa => "HIPAA",
            Self::Cobit => "COBIT",
            Self::Enisa => "ENISA",
            Self::Cmmc => "CMMC",
            Self::Fedramp => "FEDRAMP",
            Self::Itil => "ITIL",
            Self::Other => "OTHER",
        }
    }

    /// Case-insensitive lookup by wire code (`pci_dss`, `PCI-DSS` and
    /// `PCI_DSS` all match).
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL.into_iter().find(|s| s.as_str() == normalized)
    }
}

impl fmt::Display for AuditStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStatus
// ---------------------------------------------------------------------------

/// Lifecycle of an audit.
///
/// ```text
/// planning → in_progress → completed
///          ↘ cancelled   ↗
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Planning,
    InProgress,
    Completed,
    Cancelled,
}

impl AuditStatus {
    pub const ALL: [Self; 4] = [
        Self::Planning,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Finding importance, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub const ALL: [Self; 5] = [
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Info,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }

    /// Critical or high.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FindingStatus
// ---------------------------------------------------------------------------

/// Remediation lifecycle of a finding.
///
/// ```text
/// open → in_progress → resolved → closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl FindingStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Open or in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    /// Resolved or closed. Used for list ordering, not for the `resolved`
    /// filter bucket.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationType
// ---------------------------------------------------------------------------

/// Kind of a user notification. Values the client does not know about
/// deserialize to [`NotificationType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    FindingAssigned,
    FindingDueSoon,
    FindingOverdue,
    FindingStatusChanged,
    CommentAdded,
    AuditStatusChanged,
    #[serde(other)]
    Unknown,
}

impl NotificationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FindingAssigned => "finding_assigned",
            Self::FindingDueSoon => "finding_due_soon",
            Self::FindingOverdue => "finding_overdue",
            Self::FindingStatusChanged => "finding_status_changed",
            Self::CommentAdded => "comment_added",
            Self::AuditStatusChanged => "audit_status_changed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_wire_names_are_upper_case_codes() {
        let json = serde_json::to_string(&AuditStandard::PciDss).unwrap();
        assert_eq!(json, "\"PCI_DSS\"");
        let parsed: AuditStandard = serde_json::from_str("\"OWASP_TOP10\"").unwrap();
        assert_eq!(parsed, AuditStandard::OwaspTop10);
    }

    #[test]
    fn standard_from_code_is_lenient() {
        assert_eq!(AuditStandard::from_code("pci-dss"), Some(AuditStandard::PciDss));
        assert_eq!(AuditStandard::from_code(" iso27001 "), Some(AuditStandard::Iso27001));
        assert_eq!(AuditStandard::from_code("iso9001"), None);
    }

    #[test]
    fn every_standard_display_matches_serde() {
        for standard in AuditStandard::ALL {
            let json = serde_json::to_string(&standard).unwrap();
            assert_eq!(json, format!("\"{standard}\""));
        }
    }

    #[test]
    fn unknown_notification_type_is_tolerated() {
        let parsed: NotificationType = serde_json::from_str("\"weekly_digest\"").unwrap();
        assert_eq!(parsed, NotificationType::Unknown);
    }

    #[test]
    fn finding_status_activity() {
        assert!(FindingStatus::Open.is_active());
        assert!(FindingStatus::InProgress.is_active());
        assert!(FindingStatus::Resolved.is_settled());
        assert!(FindingStatus::Closed.is_settled());
    }

    #[test]
    fn urgent_severities() {
        let urgent: Vec<_> = Severity::ALL.into_iter().filter(|s| s.is_urgent()).collect();
        assert_eq!(urgent, vec![Severity::Critical, Severity::High]);
    }
}
