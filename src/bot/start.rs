use sea_orm::DatabaseConnection;
use serenity::all::{ApplicationId, Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// The caller takes the client's `http`, `cache` and `shard_manager` handles before
/// passing the client to [`start_bot`].
///
/// # Arguments
/// - `config` - Application configuration providing the token and application ID
/// - `db` - Database connection for the event handler
///
/// # Returns
/// - `Ok(Client)` - Configured client ready to start
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES;

    let handler = Handler::new(db);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .application_id(ApplicationId::new(config.discord_application_id))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This should be called from within a tokio::spawn task since it will block until the
/// bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails, e.g. an invalid token
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
