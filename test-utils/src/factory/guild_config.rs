//! Guild config factory for creating test tracking configurations.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id(987654321)
///     .message_id(Some(42))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    role_id: i64,
    channel_id: i64,
    message_id: Option<i64>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, role_id, channel_id: unique auto-incremented ids
    /// - message_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id() as i64,
            role_id: next_id() as i64,
            channel_id: next_id() as i64,
            message_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn role_id(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn message_id(mut self, message_id: Option<i64>) -> Self {
        self.message_id = message_id;
        self
    }

    /// Builds and inserts the guild config into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created config
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let now = Utc::now();

        entity::guild_config::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            role_id: ActiveValue::Set(self.role_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
