use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use attest_core::enums::Role;
use attest_core::nav::{Section, visible_sections};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: i64,
    email: String,
    full_name: String,
    role: Role,
    store: &'static str,
    visible_sections: Vec<Section>,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password()?,
    };
    if password.is_empty() {
        anyhow::bail!("auth login: password is empty");
    }

    let user = ctx.api.login(&args.email, &password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            store: ctx.session.store_name(),
            visible_sections: visible_sections(user.role),
        },
        flags.format,
    )
}

/// One line from stdin, prompting when attached to a terminal.
fn read_password() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush().ok();
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
