use crate::data::guild_config::GuildConfigRepository;
use crate::model::{
    guild_config::{MemberStat, UpsertGuildConfigParam},
    presence::PresenceState,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists;
mod find_by_guild_id;
mod find_member_stat;
mod get_all;
mod reset_member_stats;
mod upsert;
mod upsert_member_stat;
