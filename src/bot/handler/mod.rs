use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, GuildId, Interaction, Presence, Ready};
use serenity::async_trait;

pub mod guild;
pub mod interaction;
pub mod presence;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.db, ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild).await;
    }

    /// Called when a guild member's presence changes
    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        presence::handle_presence_update(&self.db, ctx, new_data).await;
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, ctx, interaction).await;
    }
}
