use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::bot::{command, component};

/// Routes an interaction to the slash command or button handler.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(cmd) => command::handle_command(db, &ctx, &cmd).await,
        Interaction::Component(press) => component::handle_component(db, &ctx, &press).await,
        _ => {}
    }
}
