use attest_auth::expiry::decode_expiry;
use attest_core::entities::User;
use attest_core::nav::{Section, visible_sections};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    api_url: String,
    token_source: Option<&'static str>,
    store: &'static str,
    expires_at: Option<String>,
    user: Option<User>,
    visible_sections: Vec<Section>,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut status = AuthStatusResponse {
        authenticated: false,
        api_url: ctx.api.base_url().to_string(),
        token_source: None,
        store: ctx.session.store_name(),
        expires_at: None,
        user: None,
        visible_sections: Vec::new(),
        note: None,
    };

    let Some(token) = ctx.session.token() else {
        status.note = Some("no stored session".into());
        return output(&status, flags.format);
    };

    status.token_source = ctx.session.source().map(|source| source.as_str());
    status.expires_at = decode_expiry(&token).ok().map(|exp| exp.to_rfc3339());

    match ctx.current_user().await {
        Ok(user) => {
            status.authenticated = true;
            status.visible_sections = visible_sections(user.role);
            status.user = Some(user);
        }
        Err(error) => {
            status.note = Some(format!("{error:#}"));
        }
    }

    output(&status, flags.format)
}
