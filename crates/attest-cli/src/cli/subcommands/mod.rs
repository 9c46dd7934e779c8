pub mod activity;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod finding;
pub mod notification;
pub mod organization;
pub mod project;
pub mod template;
pub mod user;

pub use activity::ActivityCommands;
pub use audit::AuditCommands;
pub use auth::AuthCommands;
pub use dashboard::{CardCommands, DashboardCommands, DirectionArg};
pub use finding::{CommentCommands, DueArg, EvidenceCommands, FindingCommands};
pub use notification::{NotificationCommands, ReadFilterArg};
pub use organization::OrganizationCommands;
pub use project::ProjectCommands;
pub use template::{TemplateCommands, TemplateItemArgs, TemplateItemCommands};
pub use user::UserCommands;
