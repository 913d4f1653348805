//! Ready event handlers for bot initialization.
//!
//! `ready` fires once per connection after the gateway handshake and is used to register
//! the slash commands. `cache_ready` fires once the guilds from the ready payload are in
//! the cache, which is the earliest point at which panels can be rendered.

use sea_orm::DatabaseConnection;
use serenity::all::{Command, Context, GuildId, Ready};

use crate::{bot::command, scheduler::panel_refresh::refresh_panels};

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global slash commands with a bulk overwrite, so re-registering on every
/// connection is harmless.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}

/// Handles the cache_ready event by refreshing every panel once.
///
/// # Arguments
/// - `db` - Database connection for loading guild configs
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `guilds` - Guilds that were cached
pub async fn handle_cache_ready(db: &DatabaseConnection, ctx: Context, guilds: Vec<GuildId>) {
    tracing::debug!("Cache ready with {} guild(s)", guilds.len());

    if let Err(e) = refresh_panels(db, ctx.http.clone(), ctx.cache.clone()).await {
        tracing::error!("Failed to refresh status panels on startup: {:?}", e);
    }
}
