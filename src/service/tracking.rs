//! Guild tracking configuration.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfig, MemberStat, UpsertGuildConfigParam},
};

/// Reply shown when a command needs a tracking config the guild does not have.
pub const NO_TRACKING_DATA: &str = "No tracking data found for this server.";

/// Service for enabling, disabling and resetting presence tracking in a guild.
pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingService<'a> {
    /// Creates a new TrackingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TrackingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Points tracking at a role and an already posted panel, creating the config if needed.
    ///
    /// Role, channel and panel message are written together so the stored message id always
    /// belongs to the stored channel. Existing member accumulators are kept.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `role_id` - Role to track
    /// - `channel_id` - Channel the panel was posted in
    /// - `message_id` - The posted panel message
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored config
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn configure(
        &self,
        guild_id: u64,
        role_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let config = repo
            .upsert(UpsertGuildConfigParam {
                guild_id,
                role_id: Some(role_id),
                channel_id: Some(channel_id),
                message_id: Some(message_id),
            })
            .await?;

        tracing::info!(
            "Tracking role {} in guild {}, panel {} in channel {}",
            role_id,
            guild_id,
            message_id,
            channel_id
        );

        Ok(config)
    }

    /// Gets the accumulators already stored for a guild, empty if it is not tracked.
    pub async fn stored_members(&self, guild_id: u64) -> Result<Vec<MemberStat>, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo
            .find_by_guild_id(guild_id)
            .await?
            .map(|config| config.members)
            .unwrap_or_default())
    }

    /// Removes the guild's config together with all member accumulators.
    ///
    /// # Returns
    /// - `Ok(true)` - Tracking was enabled and has been removed
    /// - `Ok(false)` - Tracking was not enabled
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn disable(&self, guild_id: u64) -> Result<bool, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let deleted = repo.delete(guild_id).await?;
        if deleted {
            tracing::info!("Disabled tracking in guild {}", guild_id);
        }

        Ok(deleted)
    }

    /// Zeroes every tracked member's accumulators, keeping their last status.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `now` - New `last_update` for every member
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members reset
    /// - `Err(AppError::NotFound)` - The guild has no tracking config
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn reset_stats(&self, guild_id: u64, now: DateTime<Utc>) -> Result<u64, AppError> {
        self.get_config(guild_id).await?;

        let repo = GuildConfigRepository::new(self.db);
        let reset = repo.reset_member_stats(guild_id, now).await?;

        tracing::info!("Reset {} member(s) in guild {}", reset, guild_id);

        Ok(reset)
    }

    /// Gets the guild's config, treating its absence as not found.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored config with members
    /// - `Err(AppError::NotFound)` - The guild has no tracking config
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_config(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        repo.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_TRACKING_DATA.to_string()))
    }
}
