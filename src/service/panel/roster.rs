//! Live roster of the members holding the tracked role.

use std::collections::HashMap;

use serenity::all::{Cache, GuildId, Member, Role, RoleId};

use crate::error::AppError;

/// Reply shown when the tracked role no longer exists.
pub const ROLE_NOT_FOUND: &str = "Role not found!";

/// The tracked role's name and the members currently holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRoster {
    pub role_name: String,
    /// Member IDs in ascending order so pages stay stable between renders.
    pub member_ids: Vec<u64>,
}

impl RoleRoster {
    /// Collects the members of `role` out of a guild's member list.
    pub fn from_members<'a>(role: &Role, members: impl IntoIterator<Item = &'a Member>) -> Self {
        let mut member_ids: Vec<u64> = members
            .into_iter()
            .filter(|member| member.roles.contains(&role.id))
            .map(|member| member.user.id.get())
            .collect();
        member_ids.sort_unstable();
        member_ids.dedup();

        Self {
            role_name: role.name.clone(),
            member_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }
}

/// Resolves the tracked role's roster from the gateway cache.
///
/// Membership comes from the cached guild members, which requires the `GUILD_MEMBERS`
/// intent.
///
/// # Returns
/// - `Ok(RoleRoster)` - Role name and current members
/// - `Err(AppError::NotFound)` - The guild is not cached or the role no longer exists
pub fn resolve_roster(cache: &Cache, guild_id: u64, role_id: u64) -> Result<RoleRoster, AppError> {
    let Some(guild) = cache.guild(GuildId::new(guild_id)) else {
        tracing::debug!("Guild {} is not in the cache", guild_id);
        return Err(AppError::NotFound(ROLE_NOT_FOUND.to_string()));
    };

    roster_in(&guild.roles, guild.members.values(), role_id)
}

/// Builds the roster of `role_id` from a guild's roles and members.
///
/// # Returns
/// - `Ok(RoleRoster)` - Role name and current members
/// - `Err(AppError::NotFound)` - The role is not among `roles`
pub fn roster_in<'a>(
    roles: &HashMap<RoleId, Role>,
    members: impl IntoIterator<Item = &'a Member>,
    role_id: u64,
) -> Result<RoleRoster, AppError> {
    let role = roles
        .get(&RoleId::new(role_id))
        .ok_or_else(|| AppError::NotFound(ROLE_NOT_FOUND.to_string()))?;

    Ok(RoleRoster::from_members(role, members))
}
