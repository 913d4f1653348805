//! Guild config data repository for database operations.
//!
//! This module provides the `GuildConfigRepository` for the two tracking tables. A guild's
//! configuration lives in `guild_config` and each tracked member's accumulators live in their
//! own `member_stat` row, so a presence event only ever rewrites the row of the member it
//! concerns. Snowflakes are stored as `i64` and converted at this boundary.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::guild_config::{GuildConfig, MemberStat, UpsertGuildConfigParam};

/// Repository providing database operations for guild tracking configuration.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    /// Creates a new GuildConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild's tracking config along with its member accumulators.
    ///
    /// Members are returned in the order they were first tracked.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Tracking is enabled for the guild
    /// - `Ok(None)` - No config exists for the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        let Some(config) = self.find_entity(guild_id).await? else {
            return Ok(None);
        };

        let members = entity::prelude::MemberStat::find()
            .filter(entity::member_stat::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::member_stat::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(GuildConfig::from_entity(config, members)))
    }

    /// Checks whether tracking is enabled for a guild without loading its members.
    ///
    /// # Returns
    /// - `Ok(true)` - A config exists for the guild
    /// - `Ok(false)` - No config exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, guild_id: u64) -> Result<bool, DbErr> {
        Ok(self.find_entity(guild_id).await?.is_some())
    }

    /// Gets every stored guild config with its members.
    ///
    /// Used by the panel refresh job to visit every configured guild.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildConfig>)` - All configs, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<GuildConfig>, DbErr> {
        let configs = entity::prelude::GuildConfig::find()
            .order_by_asc(entity::guild_config::Column::Id)
            .all(self.db)
            .await?;

        let mut members_by_guild: HashMap<i64, Vec<entity::member_stat::Model>> = HashMap::new();
        for member in entity::prelude::MemberStat::find()
            .order_by_asc(entity::member_stat::Column::Id)
            .all(self.db)
            .await?
        {
            members_by_guild
                .entry(member.guild_id)
                .or_default()
                .push(member);
        }

        Ok(configs
            .into_iter()
            .map(|config| {
                let members = members_by_guild.remove(&config.guild_id).unwrap_or_default();
                GuildConfig::from_entity(config, members)
            })
            .collect())
    }

    /// Creates or updates a guild's tracking config.
    ///
    /// When a config already exists only the fields set in `param` are overwritten; member
    /// accumulators are left untouched. Creating a config requires both `role_id` and
    /// `channel_id`.
    ///
    /// # Arguments
    /// - `param` - Guild ID plus the fields to write
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The created or updated config with its members
    /// - `Err(DbErr::Custom)` - No config exists and role or channel is missing
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertGuildConfigParam) -> Result<GuildConfig, DbErr> {
        let now = Utc::now();

        if let Some(existing) = self.find_entity(param.guild_id).await? {
            let mut active: entity::guild_config::ActiveModel = existing.into();
            if let Some(role_id) = param.role_id {
                active.role_id = ActiveValue::Set(role_id as i64);
            }
            if let Some(channel_id) = param.channel_id {
                active.channel_id = ActiveValue::Set(channel_id as i64);
            }
            if let Some(message_id) = param.message_id {
                active.message_id = ActiveValue::Set(Some(message_id as i64));
            }
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?;
        } else {
            let (Some(role_id), Some(channel_id)) = (param.role_id, param.channel_id) else {
                return Err(DbErr::Custom(format!(
                    "Cannot create guild config for guild {} without a role and channel",
                    param.guild_id
                )));
            };

            entity::guild_config::ActiveModel {
                id: ActiveValue::NotSet,
                guild_id: ActiveValue::Set(param.guild_id as i64),
                role_id: ActiveValue::Set(role_id as i64),
                channel_id: ActiveValue::Set(channel_id as i64),
                message_id: ActiveValue::Set(param.message_id.map(|id| id as i64)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?;
        }

        self.find_by_guild_id(param.guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild_config {}", param.guild_id)))
    }

    /// Deletes a guild's config and every member accumulator belonging to it.
    ///
    /// Deleting a guild that has no config is not an error.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether a config existed and was removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        entity::prelude::MemberStat::delete_many()
            .filter(entity::member_stat::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        let result = entity::prelude::GuildConfig::delete_many()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the accumulators of a single member.
    ///
    /// # Returns
    /// - `Ok(Some(MemberStat))` - The member is tracked in the guild
    /// - `Ok(None)` - No accumulators exist for the member yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_member_stat(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<MemberStat>, DbErr> {
        let entity = self.find_member_entity(guild_id, member_id).await?;

        Ok(entity.map(MemberStat::from_entity))
    }

    /// Updates a member's accumulators in place, or appends the member if not yet tracked.
    ///
    /// The guild config must already exist.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `stat` - Full accumulator state to store for the member
    ///
    /// # Returns
    /// - `Ok(MemberStat)` - The stored accumulators
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_member_stat(
        &self,
        guild_id: u64,
        stat: &MemberStat,
    ) -> Result<MemberStat, DbErr> {
        let existing = self.find_member_entity(guild_id, stat.member_id).await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::member_stat::ActiveModel = existing.into();
                active.online_seconds = ActiveValue::Set(stat.online);
                active.idle_seconds = ActiveValue::Set(stat.idle);
                active.dnd_seconds = ActiveValue::Set(stat.dnd);
                active.offline_seconds = ActiveValue::Set(stat.offline);
                active.last_status = ActiveValue::Set(stat.last_status_str().to_string());
                active.last_update = ActiveValue::Set(stat.last_update);
                active.update(self.db).await?
            }
            None => {
                entity::member_stat::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id as i64),
                    member_id: ActiveValue::Set(stat.member_id as i64),
                    online_seconds: ActiveValue::Set(stat.online),
                    idle_seconds: ActiveValue::Set(stat.idle),
                    dnd_seconds: ActiveValue::Set(stat.dnd),
                    offline_seconds: ActiveValue::Set(stat.offline),
                    last_status: ActiveValue::Set(stat.last_status_str().to_string()),
                    last_update: ActiveValue::Set(stat.last_update),
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(MemberStat::from_entity(entity))
    }

    /// Zeroes every accumulator of every member in the guild.
    ///
    /// `last_status` is preserved and `last_update` moves to `now` so time spent before the
    /// reset is not counted afterwards.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `now` - Timestamp to record as the last update
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members reset
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_member_stats(
        &self,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberStat::update_many()
            .col_expr(entity::member_stat::Column::OnlineSeconds, Expr::value(0.0))
            .col_expr(entity::member_stat::Column::IdleSeconds, Expr::value(0.0))
            .col_expr(entity::member_stat::Column::DndSeconds, Expr::value(0.0))
            .col_expr(entity::member_stat::Column::OfflineSeconds, Expr::value(0.0))
            .col_expr(entity::member_stat::Column::LastUpdate, Expr::value(now))
            .filter(entity::member_stat::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_entity(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id as i64))
            .one(self.db)
            .await
    }

    async fn find_member_entity(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<entity::member_stat::Model>, DbErr> {
        entity::prelude::MemberStat::find()
            .filter(entity::member_stat::Column::GuildId.eq(guild_id as i64))
            .filter(entity::member_stat::Column::MemberId.eq(member_id as i64))
            .one(self.db)
            .await
    }
}
