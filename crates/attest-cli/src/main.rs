#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use anyhow::Context;
use attest_auth::AuthError;
use attest_client::ClientError;
use attest_config::AttestConfig;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("attest error: {error:#}");
        if needs_login(&error) {
            eprintln!("hint: run `attest auth login` to sign in again");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = AttestConfig::load_with_dotenv().context("failed to load attest configuration")?;
    let ctx = context::AppContext::init(config, &flags)
        .context("failed to initialize attest application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ATTEST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Whether the failure means the stored session is gone or was rejected.
fn needs_login(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_unauthorized)
            || matches!(
                cause.downcast_ref::<AuthError>(),
                Some(AuthError::NotAuthenticated | AuthError::TokenExpired)
            )
    })
}

#[cfg(test)]
mod tests {
    use super::needs_login;
    use attest_auth::AuthError;
    use attest_client::ClientError;

    #[test]
    fn unauthorized_errors_ask_for_login() {
        let error = anyhow::Error::new(ClientError::Unauthorized {
            message: "Could not validate credentials".into(),
        })
        .context("failed to list audits");
        assert!(needs_login(&error));

        assert!(needs_login(&anyhow::Error::new(AuthError::NotAuthenticated)));
    }

    #[test]
    fn other_errors_do_not_ask_for_login() {
        let error = anyhow::Error::new(ClientError::Api {
            status: 404,
            message: "Finding not found".into(),
        });
        assert!(!needs_login(&error));
        assert!(!needs_login(&anyhow::anyhow!("boom")));
    }
}
