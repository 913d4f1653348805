//! Presence event handler feeding the duration tracker.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Presence};

use crate::{
    model::presence::{PresenceEvent, PresenceState},
    service::presence::PresenceService,
};

/// Handles the presence_update event when a member's status changes.
///
/// Presences outside guilds and statuses that don't map to a tracked state are ignored.
///
/// # Arguments
/// - `db` - Database connection for recording the accrual
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `presence` - The member's new presence
pub async fn handle_presence_update(db: &DatabaseConnection, _ctx: Context, presence: Presence) {
    let Some(guild_id) = presence.guild_id else {
        return;
    };

    let Some(status) = PresenceState::from_online_status(presence.status) else {
        tracing::debug!(
            "Ignoring unknown status {:?} for user {} in guild {}",
            presence.status,
            presence.user.id,
            guild_id
        );
        return;
    };

    let event = PresenceEvent {
        guild_id: guild_id.get(),
        member_id: presence.user.id.get(),
        status,
    };

    let presence_service = PresenceService::new(db);

    if let Err(e) = presence_service.record_presence(event, Utc::now()).await {
        tracing::error!(
            "Failed to record presence of member {} in guild {}: {:?}",
            event.member_id,
            event.guild_id,
            e
        );
    }
}
