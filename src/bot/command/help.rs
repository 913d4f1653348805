use serenity::all::{CreateCommand, CreateEmbed, CreateInteractionResponseMessage};

use crate::{bot::command::COMMANDS, error::AppError, service::panel::render::PANEL_COLOR};

pub const NAME: &str = "help";
pub const DESCRIPTION: &str = "Show this help message";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

pub fn run() -> Result<CreateInteractionResponseMessage, AppError> {
    Ok(CreateInteractionResponseMessage::new().embed(help_embed()))
}

fn help_embed() -> CreateEmbed {
    COMMANDS.iter().fold(
        CreateEmbed::new()
            .title("Help")
            .color(PANEL_COLOR)
            .description("Here are the available commands:"),
        |embed, (name, description)| embed.field(format!("/{}", name), *description, false),
    )
}
