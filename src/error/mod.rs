//! Error types shared by the bot, services and scheduler.
//!
//! `AppError` is the top-level error returned by every fallible operation outside the
//! repository layer. Repositories return `sea_orm::DbErr`, which converts into `AppError`
//! through `?`. Interaction handlers turn `NotFound` into a visible reply; every other
//! variant is logged at the call site and the single operation is abandoned.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal: the process exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state indicating a bug or malformed data from Discord.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A guild config, role, channel or message that an operation depends on is gone.
    ///
    /// The message is shown to the invoking user as-is.
    #[error("{0}")]
    NotFound(String),
}

/// Boxes the error to keep `AppError` small, serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
