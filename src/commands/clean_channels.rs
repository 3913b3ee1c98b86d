use log::error;
use serenity::builder;
use serenity::model::prelude::command::CommandOptionType;
use serenity::model::prelude::interaction::application_command::{
    CommandDataOption,
    CommandDataOptionValue,
};
use serenity::model::prelude::{ChannelId, GuildId};
use serenity::prelude::Context;

use crate::cleanup;
use crate::config::CleanupConfig;

pub fn register(
    command: &mut builder::CreateApplicationCommand,
) -> &mut builder::CreateApplicationCommand {
    command
        .name("clean-channels")
        .description("Delete channels whose names match the cleanup rules")
        .create_option(|option| {
            option
                .name("dryrun")
                .description("Preview the matches without deleting anything")
                .kind(CommandOptionType::Boolean)
                .required(false)
        })
}

fn dryrun_option(options: &[CommandDataOption]) -> Option<bool> {
    let option = options.iter().find(|option| option.name == "dryrun")?;
    if let Some(CommandDataOptionValue::Boolean(value)) = option.resolved.as_ref() {
        Some(*value)
    } else {
        None
    }
}

pub async fn run(
    ctx: &Context,
    guild_id: GuildId,
    options: &[CommandDataOption],
    config: &CleanupConfig,
) -> String {
    let channels = match guild_id.channels(&ctx.http).await {
        Ok(channels) => channels,
        Err(error) => {
            error!("Failed to list channels for guild {}: {}", guild_id, error);
            return "Could not list this server's channels.".to_string();
        }
    };

    let channels: Vec<(ChannelId, String)> = channels
        .into_iter()
        .map(|(id, channel)| (id, channel.name))
        .collect();

    let dry_run = dryrun_option(options).unwrap_or(config.dry_run);
    let plan = cleanup::plan(channels, config);
    let report = cleanup::execute(&ctx.http, plan, dry_run).await;
    report.render()
}
