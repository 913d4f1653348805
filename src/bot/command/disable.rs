use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CreateCommand, CreateInteractionResponseMessage, Permissions,
};

use crate::{
    bot::command::{authorize, reply},
    error::AppError,
    service::tracking::TrackingService,
};

pub const NAME: &str = "disable";
pub const DESCRIPTION: &str = "Disable status tracking for this server";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Deletes the guild's tracking config and all accumulated times. Requires `Manage Messages`.
///
/// The panel message is left in place and stops being refreshed.
pub async fn run(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let guild_id = match authorize(command, Permissions::MANAGE_MESSAGES, "Manage Messages") {
        Ok(guild_id) => guild_id,
        Err(rejection) => return Ok(rejection),
    };

    TrackingService::new(db).disable(guild_id).await?;

    Ok(reply("Status tracking disabled for this server."))
}
