//! Slash command definitions and dispatch.
//!
//! Every command module exposes its `NAME`, `DESCRIPTION`, a `register` builder and a
//! `run` function producing the reply. `run` returning `AppError::NotFound` is shown to
//! the user as-is; any other error is logged and the interaction is left unanswered.

pub mod disable;
pub mod help;
pub mod ping;
pub mod restartstaff;
pub mod setrole;
pub mod showstaff;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, Permissions,
};

use crate::error::AppError;

/// Every slash command with its description, in the order `/help` lists them.
pub const COMMANDS: [(&str, &str); 6] = [
    (setrole::NAME, setrole::DESCRIPTION),
    (disable::NAME, disable::DESCRIPTION),
    (help::NAME, help::DESCRIPTION),
    (restartstaff::NAME, restartstaff::DESCRIPTION),
    (ping::NAME, ping::DESCRIPTION),
    (showstaff::NAME, showstaff::DESCRIPTION),
];

/// Builds the global command set registered on `ready`.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        setrole::register(),
        disable::register(),
        help::register(),
        restartstaff::register(),
        ping::register(),
        showstaff::register(),
    ]
}

/// Runs a slash command and sends its reply.
///
/// # Arguments
/// - `db` - Database connection for the command services
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `command` - The received command interaction
pub async fn handle_command(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let name = command.data.name.as_str();

    let result = match name {
        setrole::NAME => setrole::run(db, ctx, command).await,
        disable::NAME => disable::run(db, command).await,
        help::NAME => help::run(),
        restartstaff::NAME => restartstaff::run(db, command).await,
        ping::NAME => ping::run(db, ctx).await,
        showstaff::NAME => showstaff::run(db, ctx, command).await,
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            return;
        }
    };

    let response = match result {
        Ok(response) => response,
        Err(AppError::NotFound(message)) => reply(message),
        Err(e) => {
            tracing::error!(
                "Failed to run /{} in guild {:?}: {:?}",
                name,
                command.guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", name, e);
    }
}

/// Plain reply visible to the whole channel.
pub fn reply(content: impl Into<String>) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().content(content)
}

/// Reply only the invoking user can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponseMessage {
    reply(content).ephemeral(true)
}

/// Checks the command was used in a guild by a member holding `required`.
///
/// # Arguments
/// - `command` - The received command interaction
/// - `required` - Permission the member needs
/// - `label` - Name of the permission as shown to users, e.g. `Manage Roles`
///
/// # Returns
/// - `Ok(u64)` - ID of the guild the command was used in
/// - `Err(CreateInteractionResponseMessage)` - Private rejection to send instead
pub fn authorize(
    command: &CommandInteraction,
    required: Permissions,
    label: &str,
) -> Result<u64, CreateInteractionResponseMessage> {
    let guild_id = command.guild_id.ok_or_else(server_only)?;

    let granted = command.member.as_ref().and_then(|member| member.permissions);
    if !permits(granted, required) {
        return Err(missing_permission(label));
    }

    Ok(guild_id.get())
}

/// Administrators implicitly hold every permission.
fn permits(granted: Option<Permissions>, required: Permissions) -> bool {
    granted.is_some_and(|p| p.administrator() || p.contains(required))
}

fn missing_permission(label: &str) -> CreateInteractionResponseMessage {
    ephemeral(format!(
        "You need to have `{}` permissions to use this command.",
        label
    ))
}

/// Private rejection for guild-only commands used in a DM.
pub fn server_only() -> CreateInteractionResponseMessage {
    ephemeral("This command can only be used in a server.")
}
