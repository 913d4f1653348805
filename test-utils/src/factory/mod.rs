//! Factory methods for creating test data.
//!
//! Each table has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Defaults use unique, monotonically increasing ids so
//! tests never collide on snowflakes.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(&db).await?;
//! let stat = factory::member_stat::MemberStatFactory::new(&db, config.guild_id)
//!     .online_seconds(120.0)
//!     .last_status("idle")
//!     .build()
//!     .await?;
//! ```

pub mod guild_config;
pub mod helpers;
pub mod member_stat;

// Re-export commonly used factory functions for concise usage
pub use guild_config::create_guild_config;
pub use member_stat::create_member_stat;
