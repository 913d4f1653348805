use std::time::Instant;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateCommand, CreateEmbed, CreateInteractionResponseMessage};

use crate::error::AppError;

pub const NAME: &str = "ping";
pub const DESCRIPTION: &str = "Show the bot and database ping";

const PING_COLOR: u32 = 0x2ecc71;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Reports the Discord REST round trip and whether the database answers.
///
/// # Returns
/// - `Ok(CreateInteractionResponseMessage)` - The `Pong!` embed
/// - `Err(AppError::DiscordErr)` - The latency probe itself failed
pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let started = Instant::now();
    ctx.http.get_current_user().await?;
    let latency_ms = started.elapsed().as_millis();

    let database_ok = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            false
        }
    };

    Ok(CreateInteractionResponseMessage::new().embed(ping_embed(latency_ms, database_ok)))
}

fn ping_embed(latency_ms: u128, database_ok: bool) -> CreateEmbed {
    let database = if database_ok {
        "Connected"
    } else {
        "Disconnected"
    };

    CreateEmbed::new()
        .title("Pong!")
        .color(PING_COLOR)
        .field("Bot Ping", format!("{}ms", latency_ms), true)
        .field("Database Ping", database, true)
}
