//! Presence duration accrual.
//!
//! A presence event closes the interval that started at the member's `last_update` and
//! credits its length to the bucket of the state the member was in during that interval.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::{
        guild_config::MemberStat,
        presence::{PresenceEvent, PresenceState},
    },
};

/// Applies a newly observed presence state to a member's accumulators.
///
/// With no previous record the member starts at zero in the new state. Otherwise the
/// seconds since `last_update` are added to the accumulator of the previous state. An
/// unknown previous state accrues nothing. The elapsed time is not clamped, so a clock that
/// moved backwards produces a negative contribution.
///
/// # Arguments
/// - `previous` - The member's stored accumulators, if any
/// - `member_id` - Discord user ID of the member
/// - `status` - The newly observed state
/// - `now` - Time of the observation
///
/// # Returns
/// - `MemberStat` - Updated accumulators with `last_status = status` and `last_update = now`
pub fn accrue(
    previous: Option<&MemberStat>,
    member_id: u64,
    status: PresenceState,
    now: DateTime<Utc>,
) -> MemberStat {
    let Some(previous) = previous else {
        return MemberStat::new(member_id, status, now);
    };

    let mut next = previous.clone();
    let elapsed = elapsed_seconds(previous.last_update, now);

    match previous.last_status {
        Some(PresenceState::Online) => next.online += elapsed,
        Some(PresenceState::Idle) => next.idle += elapsed,
        Some(PresenceState::Dnd) => next.dnd += elapsed,
        Some(PresenceState::Offline) => next.offline += elapsed,
        None => {}
    }

    next.last_status = Some(status);
    next.last_update = now;

    next
}

/// Fractional seconds between two instants, negative if `to` is before `from`.
fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

/// Service recording presence events for guilds with tracking enabled.
pub struct PresenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PresenceService<'a> {
    /// Creates a new PresenceService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a presence change for a member.
    ///
    /// Events for guilds without a tracking config are ignored. Every member of a tracked
    /// guild accrues, whether or not they currently hold the tracked role, so time is
    /// already counted when a member is later given the role.
    ///
    /// # Arguments
    /// - `event` - The observed presence change
    /// - `now` - Time of the observation
    ///
    /// # Returns
    /// - `Ok(Some(MemberStat))` - The member's updated accumulators
    /// - `Ok(None)` - The guild has no tracking config
    /// - `Err(AppError::DbErr)` - Database error reading or writing the member
    pub async fn record_presence(
        &self,
        event: PresenceEvent,
        now: DateTime<Utc>,
    ) -> Result<Option<MemberStat>, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        if !repo.exists(event.guild_id).await? {
            return Ok(None);
        }

        let previous = repo
            .find_member_stat(event.guild_id, event.member_id)
            .await?;
        let next = accrue(previous.as_ref(), event.member_id, event.status, now);

        let stored = repo.upsert_member_stat(event.guild_id, &next).await?;

        tracing::debug!(
            "Recorded {} for member {} in guild {}",
            event.status,
            event.member_id,
            event.guild_id
        );

        Ok(Some(stored))
    }
}
