pub use super::guild_config::Entity as GuildConfig;
pub use super::member_stat::Entity as MemberStat;
