//! Role-based section visibility.
//!
//! The backend enforces access; this only decides which sections a client
//! offers to a given role.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Organizations,
    Users,
    Projects,
    Audits,
    Findings,
    Templates,
    Notifications,
}

impl Section {
    /// Menu order.
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Organizations,
        Self::Users,
        Self::Projects,
        Self::Audits,
        Self::Findings,
        Self::Templates,
        Self::Notifications,
    ];

    /// Roles allowed to see this section; `None` means every role.
    #[must_use]
    pub const fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Organizations => Some(&[Role::PlatformAdmin]),
            Self::Users => Some(&[Role::PlatformAdmin, Role::OrgAdmin]),
            Self::Dashboard
            | Self::Projects
            | Self::Audits
            | Self::Findings
            | Self::Templates
            | Self::Notifications => None,
        }
    }

    #[must_use]
    pub fn is_visible_to(self, role: Role) -> bool {
        self.required_roles()
            .is_none_or(|roles| roles.contains(&role))
    }
}

/// Sections visible to `role`, in menu order.
#[must_use]
pub fn visible_sections(role: Role) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| section.is_visible_to(role))
        .collect()
}
