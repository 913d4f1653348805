//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild config with `member_count` tracked members.
///
/// Members get default accumulators. Use the individual factories when specific values
/// are needed.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_count` - Number of member rows to create
///
/// # Returns
/// - `Ok((config, members))` - The config row and member rows in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_config_with_members(
    db: &DatabaseConnection,
    member_count: usize,
) -> Result<
    (
        entity::guild_config::Model,
        Vec<entity::member_stat::Model>,
    ),
    DbErr,
> {
    let config = crate::factory::guild_config::create_guild_config(db).await?;

    let mut members = Vec::with_capacity(member_count);
    for _ in 0..member_count {
        members.push(crate::factory::member_stat::create_member_stat(db, config.guild_id).await?);
    }

    Ok((config, members))
}
