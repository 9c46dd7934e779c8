use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    store: &'static str,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.api.logout()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            store: ctx.session.store_name(),
        },
        flags.format,
    )
}
