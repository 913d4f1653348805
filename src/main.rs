mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use crate::{
    config::Config,
    error::{internal::InternalError, AppError},
    scheduler::panel_refresh,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting presence watch");

    // Initialize Discord bot and extract the handles shared with the scheduler
    let bot_client = bot::start::init_bot(&config, db.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();
    let discord_http = bot_client.http.clone();
    let cache = bot_client.cache.clone();

    let mut scheduler = panel_refresh::start_scheduler(db.clone(), discord_http, cache).await?;

    let mut bot_task = tokio::spawn(async move { bot::start::start_bot(bot_client).await });

    let finished = tokio::select! {
        result = &mut bot_task => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    let outcome = match finished {
        Some(result) => bot_result(result),
        None => {
            tracing::info!("Received Ctrl-C, shutting down");
            shard_manager.shutdown_all().await;
            bot_result(bot_task.await)
        }
    };

    if let Err(e) = &outcome {
        tracing::error!("Discord bot error: {}", e);
    }

    scheduler.shutdown().await?;
    db.close().await?;

    tracing::info!("Shutdown complete");

    outcome
}

/// Flattens the bot task's join result; a panicked or cancelled task is an error.
fn bot_result(
    result: Result<Result<(), AppError>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    result.map_err(|e| InternalError::BotTaskFailed {
        reason: e.to_string(),
    })?
}
