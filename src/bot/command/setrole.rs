use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandDataOptionValue, CommandInteraction, CommandOptionType, Context,
    CreateCommand, CreateCommandOption, CreateInteractionResponseMessage, Permissions,
};

use crate::{
    bot::command::{authorize, reply},
    error::AppError,
    service::{
        panel::{
            roster::{resolve_roster, ROLE_NOT_FOUND},
            PanelService,
        },
        tracking::TrackingService,
    },
};

pub const NAME: &str = "setrole";
pub const DESCRIPTION: &str = "Set a role to track member statuses";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Role, "role", "The role to track")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel for the status message, defaults to this channel",
            )
            .channel_types(vec![ChannelType::Text])
            .required(false),
        )
}

/// Enables tracking of a role and posts a fresh status panel.
///
/// Requires `Manage Roles`. The panel goes to the `channel` option, or the channel the
/// command was used in. Running it again moves tracking to the new role and channel and
/// posts a new panel, keeping the accumulated member times. The config is only written
/// once the panel has been posted.
///
/// # Returns
/// - `Ok(CreateInteractionResponseMessage)` - Confirmation or a rejection
/// - `Err(AppError::NotFound)` - The role option is missing or the role is not cached
/// - `Err(AppError)` - Database or Discord failure
pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let guild_id = match authorize(command, Permissions::MANAGE_ROLES, "Manage Roles") {
        Ok(guild_id) => guild_id,
        Err(rejection) => return Ok(rejection),
    };

    let mut role_id = None;
    let mut channel_id = command.channel_id.get();
    for option in &command.data.options {
        match (option.name.as_str(), &option.value) {
            ("role", CommandDataOptionValue::Role(id)) => role_id = Some(id.get()),
            ("channel", CommandDataOptionValue::Channel(id)) => channel_id = id.get(),
            _ => {}
        }
    }
    let role_id = role_id.ok_or_else(|| AppError::NotFound(ROLE_NOT_FOUND.to_string()))?;

    let roster = resolve_roster(&ctx.cache, guild_id, role_id)?;

    // Config is written only once the panel exists
    let tracking_service = TrackingService::new(db);
    let members = tracking_service.stored_members(guild_id).await?;

    let panel_service = PanelService::new(db, ctx.http.clone(), ctx.cache.clone());
    let message_id = panel_service
        .post_panel(guild_id, channel_id, &members, &roster)
        .await?;

    tracking_service
        .configure(guild_id, role_id, channel_id, message_id)
        .await?;

    Ok(reply("Role set and status message created/updated!"))
}
