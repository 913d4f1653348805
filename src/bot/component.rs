//! Status panel button handler.
//!
//! Buttons carry `{action}_{page}` custom ids. Every action re-renders the guild's stored
//! panel message at the encoded page, whichever message the button was pressed on.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::command::{ephemeral, reply, server_only},
    error::AppError,
    model::panel::PanelButton,
    service::{panel::PanelService, tracking::TrackingService},
};

const REFRESH_FAILED: &str = "Failed to refresh status.";

/// Handles a press of a panel button.
///
/// # Arguments
/// - `db` - Database connection for loading the guild config
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `component` - The received component interaction
pub async fn handle_component(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) {
    let button = match PanelButton::parse(&component.data.custom_id) {
        Ok(button) => button,
        Err(e) => {
            tracing::warn!("Ignoring component interaction: {}", e);
            return;
        }
    };

    let response = match component.guild_id {
        None => server_only(),
        Some(guild_id) => match show_page(db, ctx, guild_id.get(), button).await {
            Ok(response) => response,
            Err(AppError::NotFound(message)) => reply(message),
            Err(e) => {
                tracing::error!(
                    "Failed to refresh status in guild {}: {:?}",
                    guild_id,
                    e
                );
                reply(REFRESH_FAILED)
            }
        },
    };

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!(
            "Failed to respond to button {}: {:?}",
            component.data.custom_id,
            e
        );
    }
}

/// Edits the stored panel to show the button's target page.
///
/// # Returns
/// - `Ok(CreateInteractionResponseMessage)` - Private confirmation, or the failure reply
///   when the message could not be edited
/// - `Err(AppError::NotFound)` - Tracking is not enabled or the role is gone
/// - `Err(AppError::DbErr)` - Database error loading the config
async fn show_page(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
    button: PanelButton,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let config = TrackingService::new(db).get_config(guild_id).await?;

    let panel_service = PanelService::new(db, ctx.http.clone(), ctx.cache.clone());
    let roster = panel_service.roster(&config)?;

    match panel_service.edit_panel(&config, &roster, button.page).await {
        Ok(()) => {
            tracing::debug!(
                "Showed page {} of guild {}'s panel ({})",
                button.page,
                guild_id,
                button.action.as_str()
            );
            Ok(ephemeral("Status refreshed!"))
        }
        Err(e) => {
            tracing::error!(
                "Failed to update status message in guild {}: {}",
                guild_id,
                e
            );
            Ok(reply(REFRESH_FAILED))
        }
    }
}
