use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// A button custom id that does not follow the `{action}_{page}` format.
    ///
    /// Only reachable if a message carries components this bot did not create.
    #[error("Malformed component custom id '{custom_id}'")]
    MalformedCustomId {
        /// The custom id received from Discord
        custom_id: String,
    },

    /// The Discord bot task panicked or was cancelled before returning.
    #[error("Discord bot task failed: {reason}")]
    BotTaskFailed {
        /// Join error reported by the runtime
        reason: String,
    },
}
