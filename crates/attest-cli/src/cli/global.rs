use attest_core::Locale;
use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Display language accepted by `--lang`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LangArg {
    Tr,
    En,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Tr => Self::Tr,
            LangArg::En => Self::En,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub lang: Option<Locale>,
}
