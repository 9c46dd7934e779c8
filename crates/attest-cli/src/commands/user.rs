use attest_core::entities::{PasswordChange, UserCreate, UserUpdate};
use attest_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::commands::shared::response::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PasswordChanged {
    password_changed: bool,
}

/// Handle `attest user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        UserCommands::List { organization } => {
            output(&ctx.api.list_users(*organization).await?, flags.format)
        }
        UserCommands::Get { id } => output(&ctx.api.get_user(*id).await?, flags.format),
        UserCommands::Create {
            email,
            name,
            role,
            password,
            organization,
            inactive,
        } => {
            let data = UserCreate {
                email: email.clone(),
                full_name: name.clone(),
                password: password.clone(),
                role: parse_enum::<Role>(role, "role")?,
                organization_id: *organization,
                is_active: Some(!inactive),
            };
            output(&ctx.api.create_user(&data).await?, flags.format)
        }
        UserCommands::Update {
            id,
            email,
            name,
            role,
            organization,
            active,
        } => {
            let data = UserUpdate {
                email: email.clone(),
                full_name: name.clone(),
                role: parse_opt_enum::<Role>(role.as_deref(), "role")?,
                organization_id: *organization,
                is_active: *active,
            };
            output(&ctx.api.update_user(*id, &data).await?, flags.format)
        }
        UserCommands::Delete { id } => {
            ctx.api.delete_user(*id).await?;
            output(&DeletedResponse::new(*id), flags.format)
        }
        UserCommands::Passwd { current, new } => {
            if current == new {
                anyhow::bail!("new password must differ from the current one");
            }
            let data = PasswordChange {
                current_password: current.clone(),
                new_password: new.clone(),
            };
            ctx.api.change_password(&data).await?;
            output(
                &PasswordChanged {
                    password_changed: true,
                },
                flags.format,
            )
        }
    }
}
