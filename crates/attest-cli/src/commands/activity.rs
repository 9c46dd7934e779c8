use attest_core::entities::{ActivityFilters, ActivityLog};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::context::AppContext;
use crate::output::output;

/// Flattened log entry; `details` stays as raw JSON.
#[derive(Debug, Serialize)]
struct ActivityRow {
    id: i64,
    created_at: DateTime<Utc>,
    user: String,
    action: String,
    entity: String,
    details: Option<serde_json::Value>,
}

impl From<ActivityLog> for ActivityRow {
    fn from(log: ActivityLog) -> Self {
        let user = match (&log.user, log.user_id) {
            (Some(user), _) => user.full_name.clone(),
            (None, Some(id)) => format!("#{id}"),
            (None, None) => "system".to_string(),
        };
        Self {
            id: log.id,
            created_at: log.created_at,
            user,
            action: log.action,
            entity: format!("{} #{}", log.entity_type, log.entity_id),
            details: log.details,
        }
    }
}

/// Handle `attest activity`.
pub async fn handle(action: &ActivityCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    let logs = match action {
        ActivityCommands::List {
            entity_type,
            entity_id,
            action,
            user,
            skip,
            limit,
        } => {
            let filters = ActivityFilters {
                entity_type: entity_type.clone(),
                entity_id: *entity_id,
                action: action.clone(),
                user_id: *user,
                skip: *skip,
                limit: Some(ctx.limit(*limit, flags)),
            };
            ctx.api.list_activity(&filters).await?
        }
        ActivityCommands::Entity {
            entity_type,
            entity_id,
            skip,
            limit,
        } => {
            ctx.api
                .entity_activity(entity_type, *entity_id, *skip, Some(ctx.limit(*limit, flags)))
                .await?
        }
    };
    let rows: Vec<ActivityRow> = logs.into_iter().map(ActivityRow::from).collect();
    output(&rows, flags.format)
}
