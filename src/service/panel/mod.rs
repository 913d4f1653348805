//! Status panel service.
//!
//! The panel is a single message per guild showing the tracked role's members and their
//! accumulated presence durations, ten per page. It is posted by `/setrole`, edited in
//! place by the pagination buttons and re-rendered at page 0 by the refresh job.
//!
//! - `roster` - Who currently holds the tracked role
//! - `render` - Embed and button row construction

pub mod render;
pub mod roster;

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Cache, ChannelId, CreateMessage, EditMessage, MessageId},
    http::Http,
};

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfig, MemberStat},
    service::panel::{
        render::render_page,
        roster::{resolve_roster, RoleRoster},
    },
};

/// Service posting and editing status panels.
pub struct PanelService<'a> {
    /// Database connection for reading guild configs
    db: &'a DatabaseConnection,
    /// Discord HTTP client for sending and editing messages
    http: Arc<Http>,
    /// Gateway cache holding guild roles and members
    cache: Arc<Cache>,
}

impl<'a> PanelService<'a> {
    /// Creates a new PanelService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `cache` - Arc-wrapped gateway cache for role membership
    ///
    /// # Returns
    /// - `PanelService` - New service instance
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { db, http, cache }
    }

    /// Resolves the roster of the config's tracked role.
    ///
    /// # Returns
    /// - `Ok(RoleRoster)` - Current role holders
    /// - `Err(AppError::NotFound)` - The role is gone or the guild is not cached
    pub fn roster(&self, config: &GuildConfig) -> Result<RoleRoster, AppError> {
        resolve_roster(&self.cache, config.guild_id, config.role_id)
    }

    /// Posts a new panel at page 0.
    ///
    /// Nothing is stored: the caller saves the returned message id together with the
    /// channel once the post has succeeded.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the panel belongs to
    /// - `channel_id` - Channel to post the panel in
    /// - `members` - Stored member accumulators, empty for a guild tracked for the first time
    /// - `roster` - Current holders of the tracked role
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the posted message
    /// - `Err(AppError::DiscordErr)` - Failed to send the message
    pub async fn post_panel(
        &self,
        guild_id: u64,
        channel_id: u64,
        members: &[MemberStat],
        roster: &RoleRoster,
    ) -> Result<u64, AppError> {
        let page = render_page(roster, members, 0);
        let message = CreateMessage::new()
            .embed(page.embed(Utc::now())?)
            .components(page.components());

        let channel_id = ChannelId::new(channel_id);
        let posted = channel_id.send_message(&self.http, message).await?;

        tracing::info!(
            "Posted status panel {} in channel {} for guild {}",
            posted.id,
            channel_id,
            guild_id
        );

        Ok(posted.id.get())
    }

    /// Edits the stored panel message to show `page`.
    ///
    /// # Returns
    /// - `Ok(())` - The message was edited
    /// - `Err(AppError::NotFound)` - No panel message has been posted for the guild
    /// - `Err(AppError::DiscordErr)` - The message could not be edited, e.g. it was deleted
    pub async fn edit_panel(
        &self,
        config: &GuildConfig,
        roster: &RoleRoster,
        page: usize,
    ) -> Result<(), AppError> {
        let Some(message_id) = config.message_id else {
            return Err(AppError::NotFound(format!(
                "No status message stored for guild {}",
                config.guild_id
            )));
        };

        let rendered = render_page(roster, &config.members, page);
        let edit = EditMessage::new()
            .embed(rendered.embed(Utc::now())?)
            .components(rendered.components());

        self.http
            .edit_message(
                ChannelId::new(config.channel_id),
                MessageId::new(message_id),
                &edit,
                vec![],
            )
            .await?;

        Ok(())
    }

    /// Re-renders page 0 of every configured guild's panel.
    ///
    /// Guilds whose role, cache entry or message cannot be resolved are skipped with a log
    /// line. A failure in one guild never stops the rest from being refreshed.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of panels successfully refreshed
    /// - `Err(AppError::DbErr)` - Failed to load the guild configs
    pub async fn refresh_all(&self) -> Result<usize, AppError> {
        let repo = GuildConfigRepository::new(self.db);
        let configs = repo.get_all().await?;

        let mut refreshed = 0;
        for config in &configs {
            match self.refresh_guild(config).await {
                Ok(()) => refreshed += 1,
                Err(AppError::NotFound(reason)) => {
                    tracing::warn!(
                        "Skipping status refresh for guild {}: {}",
                        config.guild_id,
                        reason
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to update status message in guild {}: {}",
                        config.guild_id,
                        e
                    );
                }
            }
        }

        tracing::debug!("Refreshed {}/{} status panels", refreshed, configs.len());

        Ok(refreshed)
    }

    async fn refresh_guild(&self, config: &GuildConfig) -> Result<(), AppError> {
        let roster = self.roster(config)?;

        self.edit_panel(config, &roster, 0).await
    }
}
