//! Member stat factory for creating tracked member accumulators.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member stats with customizable fields.
///
/// The owning guild config must exist before `build()` is called.
pub struct MemberStatFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    member_id: i64,
    online_seconds: f64,
    idle_seconds: f64,
    dnd_seconds: f64,
    offline_seconds: f64,
    last_status: String,
    last_update: DateTime<Utc>,
}

impl<'a> MemberStatFactory<'a> {
    /// Creates a new MemberStatFactory with default values.
    ///
    /// Defaults:
    /// - member_id: unique auto-incremented id
    /// - all accumulators: `0.0`
    /// - last_status: `"offline"`
    /// - last_update: now
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            member_id: next_id() as i64,
            online_seconds: 0.0,
            idle_seconds: 0.0,
            dnd_seconds: 0.0,
            offline_seconds: 0.0,
            last_status: "offline".to_string(),
            last_update: Utc::now(),
        }
    }

    pub fn member_id(mut self, member_id: i64) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn online_seconds(mut self, seconds: f64) -> Self {
        self.online_seconds = seconds;
        self
    }

    pub fn idle_seconds(mut self, seconds: f64) -> Self {
        self.idle_seconds = seconds;
        self
    }

    pub fn dnd_seconds(mut self, seconds: f64) -> Self {
        self.dnd_seconds = seconds;
        self
    }

    pub fn offline_seconds(mut self, seconds: f64) -> Self {
        self.offline_seconds = seconds;
        self
    }

    pub fn last_status(mut self, status: impl Into<String>) -> Self {
        self.last_status = status.into();
        self
    }

    pub fn last_update(mut self, last_update: DateTime<Utc>) -> Self {
        self.last_update = last_update;
        self
    }

    /// Builds and inserts the member stat into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member_stat::Model)` - Created member stat
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member_stat::Model, DbErr> {
        entity::member_stat::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            member_id: ActiveValue::Set(self.member_id),
            online_seconds: ActiveValue::Set(self.online_seconds),
            idle_seconds: ActiveValue::Set(self.idle_seconds),
            dnd_seconds: ActiveValue::Set(self.dnd_seconds),
            offline_seconds: ActiveValue::Set(self.offline_seconds),
            last_status: ActiveValue::Set(self.last_status),
            last_update: ActiveValue::Set(self.last_update),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member stat with default values for the given guild.
pub async fn create_member_stat(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::member_stat::Model, DbErr> {
    MemberStatFactory::new(db, guild_id).build().await
}
