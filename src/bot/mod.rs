//! Discord bot integration for presence tracking and the status panel.
//!
//! The bot receives presence updates for every guild member, serves the slash commands
//! and handles the panel's pagination buttons. The client's HTTP client and cache are
//! shared with the panel refresh scheduler so it can edit panels without a second
//! connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, role and channel state for the cache
//! - `GUILD_MEMBERS` - Keep guild members (and their roles) in the cache (privileged intent)
//! - `GUILD_PRESENCES` - Receive presence updates (privileged intent)
//!
//! Note: both privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod component;
pub mod handler;
pub mod start;
