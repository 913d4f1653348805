use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponseMessage,
};

use crate::{
    bot::command::server_only,
    error::AppError,
    service::{
        panel::{render::PANEL_COLOR, roster::RoleRoster, PanelService},
        tracking::TrackingService,
    },
};

pub const NAME: &str = "showstaff";
pub const DESCRIPTION: &str = "Show the list of staff members being tracked";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Lists the members currently holding the tracked role.
///
/// # Returns
/// - `Ok(CreateInteractionResponseMessage)` - The staff embed
/// - `Err(AppError::NotFound)` - Tracking is not enabled or the role is gone
pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let Some(guild_id) = command.guild_id else {
        return Ok(server_only());
    };

    let config = TrackingService::new(db).get_config(guild_id.get()).await?;
    let roster = PanelService::new(db, ctx.http.clone(), ctx.cache.clone()).roster(&config)?;

    Ok(CreateInteractionResponseMessage::new().embed(staff_embed(&roster)))
}

fn staff_embed(roster: &RoleRoster) -> CreateEmbed {
    let staff = if roster.is_empty() {
        "No staff members found.".to_string()
    } else {
        roster
            .member_ids
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title(format!("Staff members in role: {}", roster.role_name))
        .color(PANEL_COLOR)
        .description(staff)
}
