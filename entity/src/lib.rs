//! SeaORM entities for the presence tracking tables.

pub mod prelude;

pub mod guild_config;
pub mod member_stat;
