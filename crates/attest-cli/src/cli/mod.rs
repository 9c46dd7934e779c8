use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, LangArg, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `attest` binary.
#[derive(Debug, Parser)]
#[command(name = "attest", version, about = "Attest - compliance audit management client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Display language (defaults to `general.language`)
    #[arg(long, global = true)]
    pub lang: Option<LangArg>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            lang: self.lang.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use attest_core::Locale;
    use clap::{CommandFactory, Parser};

    use super::subcommands::{
        AuditCommands, CardCommands, DashboardCommands, EvidenceCommands, FindingCommands,
        NotificationCommands, TemplateCommands, TemplateItemCommands,
    };
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "attest",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "--lang",
            "en",
            "notification",
            "count",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert_eq!(cli.global_flags().lang, Some(Locale::En));
        assert!(matches!(
            cli.command,
            Commands::Notification {
                action: NotificationCommands::Count
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["attest", "notification", "count", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.global_flags().lang, None);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["attest", "--format", "xml", "notification", "count"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lang_rejects_unsupported_language() {
        let parsed = Cli::try_parse_from(["attest", "--lang", "de", "notification", "count"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn finding_evidence_upload_parses() {
        let cli = Cli::try_parse_from([
            "attest",
            "finding",
            "evidence",
            "upload",
            "12",
            "./login.png",
            "--description",
            "screenshot",
        ])
        .expect("cli should parse");

        let Commands::Finding {
            action: FindingCommands::Evidence {
                action: EvidenceCommands::Upload {
                    finding_id,
                    path,
                    description,
                },
            },
        } = cli.command
        else {
            panic!("expected finding evidence upload");
        };
        assert_eq!(finding_id, 12);
        assert_eq!(path.to_str(), Some("./login.png"));
        assert_eq!(description.as_deref(), Some("screenshot"));
    }

    #[test]
    fn dashboard_card_move_parses_direction() {
        let cli = Cli::try_parse_from(["attest", "dashboard", "cards", "move", "recent_audits", "up"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Dashboard {
                action: DashboardCommands::Cards {
                    action: CardCommands::Move { .. }
                }
            }
        ));

        let bad = Cli::try_parse_from(["attest", "dashboard", "cards", "move", "recent_audits", "left"]);
        assert!(bad.is_err());
    }

    #[test]
    fn audit_copy_requires_name() {
        assert!(Cli::try_parse_from(["attest", "audit", "copy", "3"]).is_err());
        let cli = Cli::try_parse_from(["attest", "audit", "copy", "3", "--name", "Q3 review"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Audit {
                action: AuditCommands::Copy { id: 3, .. }
            }
        ));
    }

    #[test]
    fn template_item_delete_needs_template_id() {
        assert!(Cli::try_parse_from(["attest", "template", "item", "delete", "7"]).is_err());
        let cli = Cli::try_parse_from(["attest", "template", "item", "delete", "7", "--template", "2"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Template {
                action: TemplateCommands::Item {
                    action: TemplateItemCommands::Delete {
                        item_id: 7,
                        template: 2
                    }
                }
            }
        ));
    }

    #[test]
    fn schema_takes_a_type_name() {
        let cli = Cli::try_parse_from(["attest", "schema", "finding"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema command");
        };
        assert_eq!(args.type_name, "finding");
    }
}
