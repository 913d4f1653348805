//! Domain models and parameter types.
//!
//! Entity models are converted into these types at the repository boundary so services and
//! bot handlers never touch SeaORM models directly. Discord payloads are narrowed into these
//! types by the bot handlers before they reach a service.

pub mod guild_config;
pub mod panel;
pub mod presence;
