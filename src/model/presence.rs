//! Presence states and presence events.

use std::fmt;

use serenity::all::OnlineStatus;

/// One of the four presence buckets durations are accumulated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceState {
    Online,
    Idle,
    Dnd,
    Offline,
}

impl PresenceState {
    /// Storage form of the state, as written to `member_stat.last_status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceState::Online => "online",
            PresenceState::Idle => "idle",
            PresenceState::Dnd => "dnd",
            PresenceState::Offline => "offline",
        }
    }

    /// Parses the storage form. Returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(PresenceState::Online),
            "idle" => Some(PresenceState::Idle),
            "dnd" => Some(PresenceState::Dnd),
            "offline" => Some(PresenceState::Offline),
            _ => None,
        }
    }

    /// Maps Discord's online status onto a tracked state.
    ///
    /// Invisible members are reported to other clients as offline, so they count as offline
    /// here as well.
    pub fn from_online_status(status: OnlineStatus) -> Option<Self> {
        match status {
            OnlineStatus::Online => Some(PresenceState::Online),
            OnlineStatus::Idle => Some(PresenceState::Idle),
            OnlineStatus::DoNotDisturb => Some(PresenceState::Dnd),
            OnlineStatus::Invisible | OnlineStatus::Offline => Some(PresenceState::Offline),
            _ => None,
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presence change observed for a guild member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceEvent {
    pub guild_id: u64,
    pub member_id: u64,
    pub status: PresenceState,
}
