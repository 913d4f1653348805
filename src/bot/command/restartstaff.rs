use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CreateCommand, CreateInteractionResponseMessage, Permissions,
};

use crate::{
    bot::command::{authorize, reply},
    error::AppError,
    service::tracking::TrackingService,
};

pub const NAME: &str = "restartstaff";
pub const DESCRIPTION: &str = "Reset the tracked time for all staff members";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Zeroes every tracked member's times. Requires `Manage Messages`.
///
/// # Returns
/// - `Ok(CreateInteractionResponseMessage)` - Confirmation or a rejection
/// - `Err(AppError::NotFound)` - Tracking is not enabled in the guild
/// - `Err(AppError::DbErr)` - Database error during the reset
pub async fn run(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let guild_id = match authorize(command, Permissions::MANAGE_MESSAGES, "Manage Messages") {
        Ok(guild_id) => guild_id,
        Err(rejection) => return Ok(rejection),
    };

    TrackingService::new(db)
        .reset_stats(guild_id, Utc::now())
        .await?;

    Ok(reply("Staff time has been reset."))
}
