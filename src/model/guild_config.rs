//! Domain models for guild tracking configuration and per-member accumulators.

use chrono::{DateTime, Utc};

use crate::model::presence::PresenceState;

/// Tracking configuration for a guild along with every tracked member's accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Role whose members are shown on the panel.
    pub role_id: u64,
    /// Channel the panel message is posted in.
    pub channel_id: u64,
    /// Panel message, `None` until the first panel has been posted.
    pub message_id: Option<u64>,
    /// Accumulators for every member a presence event has been seen for.
    pub members: Vec<MemberStat>,
}

impl GuildConfig {
    /// Converts entity models to a guild config domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::guild_config::Model,
        members: Vec<entity::member_stat::Model>,
    ) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            role_id: entity.role_id as u64,
            channel_id: entity.channel_id as u64,
            message_id: entity.message_id.map(|id| id as u64),
            members: members.into_iter().map(MemberStat::from_entity).collect(),
        }
    }

    /// Looks up the accumulators of a member.
    pub fn member(&self, member_id: u64) -> Option<&MemberStat> {
        self.members.iter().find(|m| m.member_id == member_id)
    }
}

/// Per-state running totals of seconds for a single member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStat {
    pub member_id: u64,
    pub online: f64,
    pub idle: f64,
    pub dnd: f64,
    pub offline: f64,
    /// Most recently observed state. `None` when the stored value is not a known state.
    pub last_status: Option<PresenceState>,
    /// When accumulation was last applied.
    pub last_update: DateTime<Utc>,
}

impl MemberStat {
    /// Creates a member with zeroed accumulators.
    pub fn new(member_id: u64, status: PresenceState, now: DateTime<Utc>) -> Self {
        Self {
            member_id,
            online: 0.0,
            idle: 0.0,
            dnd: 0.0,
            offline: 0.0,
            last_status: Some(status),
            last_update: now,
        }
    }

    pub fn from_entity(entity: entity::member_stat::Model) -> Self {
        Self {
            member_id: entity.member_id as u64,
            online: entity.online_seconds,
            idle: entity.idle_seconds,
            dnd: entity.dnd_seconds,
            offline: entity.offline_seconds,
            last_status: PresenceState::parse(&entity.last_status),
            last_update: entity.last_update,
        }
    }

    /// Storage form of `last_status`.
    ///
    /// Unknown states are written back as `unknown` so they keep accruing nothing.
    pub fn last_status_str(&self) -> &'static str {
        self.last_status
            .map(|s| s.as_str())
            .unwrap_or("unknown")
    }

    /// Sum of all four accumulators.
    pub fn total(&self) -> f64 {
        self.online + self.idle + self.dnd + self.offline
    }
}

/// Parameters for creating or updating a guild config.
///
/// Only the fields that are `Some` are written to an existing config. Creating a new config
/// requires both `role_id` and `channel_id`.
#[derive(Debug, Clone, Default)]
pub struct UpsertGuildConfigParam {
    pub guild_id: u64,
    pub role_id: Option<u64>,
    pub channel_id: Option<u64>,
    pub message_id: Option<u64>,
}
