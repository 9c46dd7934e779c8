use attest_core::Locale;
use attest_core::entities::Notification;
use attest_core::enums::NotificationType;
use attest_core::filters::ReadFilter;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{NotificationCommands, ReadFilterArg};
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// One notification as shown to the user: text rendered for the display
/// language, plus the command that opens the related record.
#[derive(Debug, Serialize)]
struct NotificationRow {
    id: i64,
    kind: NotificationType,
    title: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
    link: Option<String>,
}

impl NotificationRow {
    fn new(notification: &Notification, locale: Locale) -> Self {
        let rendered = attest_notify::render(notification, locale);
        Self {
            id: notification.id,
            kind: notification.kind,
            title: rendered.title,
            message: rendered.message,
            read: notification.read,
            created_at: notification.created_at,
            link: attest_notify::link_target(notification).map(|target| target.command_hint()),
        }
    }
}

#[derive(Debug, Serialize)]
struct UnreadResponse {
    unread: u64,
}

#[derive(Debug, Serialize)]
struct MarkedResponse {
    updated: u64,
}

impl From<ReadFilterArg> for ReadFilter {
    fn from(arg: ReadFilterArg) -> Self {
        match arg {
            ReadFilterArg::All => Self::All,
            ReadFilterArg::Unread => Self::Unread,
            ReadFilterArg::Read => Self::Read,
        }
    }
}

/// Handle `attest notification`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        NotificationCommands::List {
            filter,
            skip,
            limit,
        } => {
            let limit = ctx.limit(*limit, flags);
            let notifications = ctx
                .api
                .list_notifications((*filter).into(), *skip, Some(limit))
                .await?;
            let rows: Vec<NotificationRow> = notifications
                .iter()
                .map(|n| NotificationRow::new(n, ctx.locale))
                .collect();
            output(&rows, flags.format)
        }
        NotificationCommands::Count => {
            let unread = ctx.api.unread_notification_count().await?;
            output(&UnreadResponse { unread }, flags.format)
        }
        NotificationCommands::Read { id } => {
            let notification = ctx.api.mark_notification_read(*id).await?;
            output(&NotificationRow::new(&notification, ctx.locale), flags.format)
        }
        NotificationCommands::ReadAll => {
            let updated = ctx.api.mark_all_notifications_read().await?;
            tracing::debug!(updated, "marked notifications read");
            output(&MarkedResponse { updated }, flags.format)
        }
        NotificationCommands::Delete { id } => {
            ctx.api.delete_notification(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use attest_core::Locale;
    use attest_core::entities::Notification;
    use attest_core::enums::NotificationType;
    use attest_core::filters::ReadFilter;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::NotificationRow;
    use crate::cli::subcommands::ReadFilterArg;

    fn overdue() -> Notification {
        Notification {
            id: 7,
            user_id: 4,
            kind: NotificationType::FindingOverdue,
            title: "Bulgu Süresi Geçti".into(),
            message: "\"MFA not enforced\" bulgusu son tarih geçti (3 gün)".into(),
            related_entity_type: Some("finding".into()),
            related_entity_id: Some(12),
            read: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_is_rendered_for_locale() {
        let row = NotificationRow::new(&overdue(), Locale::En);
        assert_eq!(row.message, "Finding \"MFA not enforced\" is 3 days overdue");
        assert_eq!(row.link.as_deref(), Some("attest finding get 12"));
    }

    #[test]
    fn row_without_related_entity_has_no_link() {
        let mut n = overdue();
        n.related_entity_id = None;
        assert_eq!(NotificationRow::new(&n, Locale::Tr).link, None);
    }

    #[test]
    fn filter_arg_maps_to_read_filter() {
        assert_eq!(ReadFilter::from(ReadFilterArg::Unread), ReadFilter::Unread);
        assert_eq!(ReadFilter::from(ReadFilterArg::All).as_query(), None);
    }
}
