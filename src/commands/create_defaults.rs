use log::error;
use serenity::builder;
use serenity::model::prelude::GuildId;
use serenity::prelude::Context;

use crate::config::CleanupConfig;
use crate::provision;

pub fn register(
    command: &mut builder::CreateApplicationCommand,
) -> &mut builder::CreateApplicationCommand {
    command
        .name("create-defaults")
        .description("Create the standard channel set, skipping ones that exist")
}

pub async fn run(ctx: &Context, guild_id: GuildId, config: &CleanupConfig) -> String {
    let existing: Vec<String> = match guild_id.channels(&ctx.http).await {
        Ok(channels) => channels.into_values().map(|channel| channel.name).collect(),
        Err(error) => {
            error!("Failed to list channels for guild {}: {}", guild_id, error);
            return "Could not list this server's channels.".to_string();
        }
    };

    let created =
        provision::provision(&ctx.http, guild_id, &config.default_channels, &existing).await;
    format!("Created **{}** channels.", created)
}
