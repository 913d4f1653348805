//! Guild event handler keeping the member cache complete.
//!
//! Discord only sends part of a large guild's member list in `GUILD_CREATE`. The panel
//! roster is read from the cache, so the remaining members are requested in chunks.

use serenity::all::{ChunkGuildFilter, Context, Guild};

/// Handles the guild_create event when a guild becomes available or the bot joins it.
///
/// # Arguments
/// - `ctx` - Discord context providing the shard to request member chunks on
/// - `guild` - The guild as received from the gateway
pub async fn handle_guild_create(ctx: Context, guild: Guild) {
    let cached_members = guild.members.len() as u64;

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, cached_members: {}",
        guild.name,
        guild.id,
        guild.member_count,
        cached_members
    );

    if cached_members < guild.member_count {
        ctx.shard
            .chunk_guild(guild.id, None, false, ChunkGuildFilter::None, None);
    }
}
