use std::collections::BTreeMap;

use attest_client::{ClientError, FindingQuery};
use attest_core::Locale;
use attest_core::dashboard::{self, DASHBOARD_LIST_LEN};
use attest_core::entities::{Audit, DashboardStats, Finding};
use attest_core::enums::{FindingStatus, Severity};
use attest_core::filters::DueState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use super::cards::{card_title, visible};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

/// One rendered dashboard card.
#[derive(Debug, Serialize)]
struct Section {
    id: String,
    title: String,
    content: Value,
}

/// Everything a card can draw from.
struct DashboardData {
    stats: DashboardStats,
    template_count: usize,
    audits: Vec<Audit>,
    findings: Vec<Finding>,
    now: DateTime<Utc>,
}

pub async fn run(project: Option<i64>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lang = Some(ctx.locale);
    let (stats, projects, audits, findings, templates) = tokio::join!(
        ctx.api.dashboard_stats(project),
        ctx.api.list_projects(None),
        ctx.api.list_audits(project),
        ctx.api.list_findings(FindingQuery::default()),
        ctx.api.list_templates(None, lang),
    );
    let projects = or_empty(projects, "projects")?;
    let audits = or_empty(audits, "audits")?;
    let mut findings = or_empty(findings, "findings")?;
    let templates = or_empty(templates, "templates")?;

    // /findings has no project filter; narrow through the audit list.
    if project.is_some() {
        findings.retain(|f| audits.iter().any(|a| a.id == f.audit_id));
    }

    let now = Utc::now();
    let stats = match stats {
        Ok(stats) => stats,
        Err(error) if error.is_unauthorized() => return Err(error.into()),
        Err(error) => {
            tracing::warn!(%error, "analytics unavailable; computing dashboard from lists");
            let user_id = ctx.session.user().map(|u| u.id);
            let project_count = if project.is_some() { 1 } else { projects.len() };
            dashboard::stats_from_lists(project_count, &audits, &findings, user_id, now)
        }
    };

    let data = DashboardData {
        stats,
        template_count: templates.len(),
        audits,
        findings,
        now,
    };

    let prefs = ctx.card_preferences()?;
    let sections: Vec<Section> = visible(&prefs)
        .iter()
        .filter_map(|card| {
            let content = card_content(&card.id, &data, ctx.locale)?;
            Some(Section {
                id: card.id.clone(),
                title: card_title(card, ctx.locale).to_string(),
                content,
            })
        })
        .collect();

    if flags.format == OutputFormat::Table {
        for section in &sections {
            println!("== {} ==", section.title);
            println!("{}\n", render(&section.content, flags.format)?);
        }
        Ok(())
    } else {
        output(&sections, flags.format)
    }
}

/// A failed list leaves its cards empty instead of failing the dashboard.
/// A 401 still aborts: the session is gone.
fn or_empty<T>(result: Result<Vec<T>, ClientError>, what: &str) -> anyhow::Result<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(error) if error.is_unauthorized() => Err(error.into()),
        Err(error) => {
            tracing::warn!(%error, list = what, "dashboard list unavailable; showing it empty");
            Ok(Vec::new())
        }
    }
}

fn card_content(id: &str, data: &DashboardData, locale: Locale) -> Option<Value> {
    let stats = &data.stats;
    let content = match id {
        "stats_projects" => json!(stats.total_projects),
        "stats_audits" => json!(stats.total_audits),
        "stats_open_findings" => json!({
            "open": stats.open_findings,
            "urgent": stats.urgent_findings,
            "overdue": stats.overdue_findings,
            "due_soon": stats.due_soon_findings,
            "assigned_to_me": stats.my_findings,
            "completion_rate": format!("{:.1}%", stats.completion_rate),
        }),
        "stats_templates" => json!(data.template_count),
        "severity_distribution" => labelled(
            &stats.severity_distribution,
            &wire_names(Severity::ALL, Severity::as_str),
            "severity",
            locale,
        ),
        "status_distribution" => labelled(
            &stats.status_distribution,
            &wire_names(FindingStatus::ALL, FindingStatus::as_str),
            "status",
            locale,
        ),
        "urgent_findings" => {
            let rows: Vec<Value> = dashboard::urgent_findings(&data.findings, DASHBOARD_LIST_LEN)
                .iter()
                .map(|f| {
                    json!({
                        "id": f.id,
                        "title": f.title,
                        "severity": locale.text_or(&format!("severity.{}", f.severity.as_str()), f.severity.as_str()),
                        "status": locale.status_label(f.status.as_str()),
                        "due": DueState::classify(f.due_date, data.now),
                    })
                })
                .collect();
            Value::Array(rows)
        }
        "recent_audits" => {
            let rows: Vec<Value> = dashboard::recent_audits(&data.audits, DASHBOARD_LIST_LEN)
                .iter()
                .map(|a| {
                    json!({
                        "id": a.id,
                        "name": a.name,
                        "standard": a.standard,
                        "status": locale.status_label(a.status.as_str()),
                        "created_at": a.created_at,
                    })
                })
                .collect();
            Value::Array(rows)
        }
        other => {
            tracing::debug!(card = other, "no renderer for card");
            return None;
        }
    };
    Some(content)
}

/// Distribution keyed by localized label. Keys in `order` come first in that
/// order; anything else the backend sends follows alphabetically.
fn labelled(counts: &BTreeMap<String, u64>, order: &[&str], prefix: &str, locale: Locale) -> Value {
    let known = order.iter().filter_map(|key| counts.get_key_value(*key));
    let extra = counts.iter().filter(|(key, _)| !order.contains(&key.as_str()));
    let map: serde_json::Map<String, Value> = known
        .chain(extra)
        .map(|(key, count)| {
            let label = locale.text_or(&format!("{prefix}.{key}"), key);
            (label.to_string(), json!(count))
        })
        .collect();
    Value::Object(map)
}

fn wire_names<T: Copy, const N: usize>(all: [T; N], as_str: fn(T) -> &'static str) -> Vec<&'static str> {
    all.into_iter().map(as_str).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use attest_client::ClientError;
    use attest_core::Locale;
    use attest_core::entities::DashboardStats;
    use attest_core::enums::Severity;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{DashboardData, card_content, labelled, or_empty, wire_names};

    fn data() -> DashboardData {
        DashboardData {
            stats: DashboardStats {
                total_projects: 3,
                open_findings: 4,
                severity_distribution: BTreeMap::from([("critical".to_string(), 2)]),
                ..DashboardStats::default()
            },
            template_count: 6,
            audits: Vec::new(),
            findings: Vec::new(),
            now: Utc::now(),
        }
    }

    #[test]
    fn counters_come_from_stats() {
        let data = data();
        assert_eq!(card_content("stats_projects", &data, Locale::En), Some(json!(3)));
        assert_eq!(card_content("stats_templates", &data, Locale::En), Some(json!(6)));
        let open = card_content("stats_open_findings", &data, Locale::En).unwrap();
        assert_eq!(open["open"], json!(4));
        assert_eq!(open["completion_rate"], json!("0.0%"));
    }

    #[test]
    fn distribution_follows_severity_order() {
        let counts = BTreeMap::from([
            ("info".to_string(), 1),
            ("critical".to_string(), 2),
            ("bogus".to_string(), 1),
            ("medium".to_string(), 3),
        ]);
        let order = wire_names(Severity::ALL, Severity::as_str);
        let value = labelled(&counts, &order, "severity", Locale::Tr);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["Kritik", "Orta", "Bilgi", "bogus"]);
    }

    #[test]
    fn empty_lists_render_empty_arrays() {
        let data = data();
        assert_eq!(card_content("urgent_findings", &data, Locale::En), Some(json!([])));
        assert_eq!(card_content("recent_audits", &data, Locale::En), Some(json!([])));
    }

    #[test]
    fn failed_lists_degrade_to_empty() {
        let failed: Result<Vec<i64>, ClientError> = Err(ClientError::Api {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(or_empty(failed, "templates").unwrap(), Vec::<i64>::new());
        assert_eq!(or_empty(Ok(vec![1, 2]), "templates").unwrap(), vec![1, 2]);
    }

    #[test]
    fn unauthorized_list_still_fails() {
        let failed: Result<Vec<i64>, ClientError> = Err(ClientError::Unauthorized {
            message: "expired".into(),
        });
        assert!(or_empty(failed, "audits").is_err());
    }

    #[test]
    fn unknown_card_renders_nothing() {
        assert_eq!(card_content("weather", &data(), Locale::En), None);
    }
}
