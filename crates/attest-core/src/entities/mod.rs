//! Entity structs for the resources served by the backend.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Create/update payloads sit next to the
//! entity they target; update payloads skip `None` fields so that a partial
//! update only touches what the caller set.

mod activity;
mod analytics;
mod audit;
mod finding;
mod notification;
mod organization;
mod project;
mod template;
mod user;

pub use activity::{ActivityFilters, ActivityLog};
pub use analytics::{DashboardStats, TimelinePoint};
pub use audit::{Audit, AuditCreate, AuditUpdate};
pub use finding::{
    Comment, CommentCreate, Evidence, Finding, FindingCreate, FindingUpdate, UserSummary,
};
pub use notification::{Notification, UnreadCount, UpdatedCount};
pub use organization::{Organization, OrganizationCreate, OrganizationUpdate};
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use template::{
    Template, TemplateCopy, TemplateCreate, TemplateItem, TemplateItemInput, TemplateUpdate,
};
pub use user::{PasswordChange, User, UserCreate, UserUpdate};

/// Records that carry a backend id and a human-readable label.
pub trait Identified {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
}
