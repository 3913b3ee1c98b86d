use log::error;
use serenity::builder;
use serenity::model::prelude::command::CommandOptionType;
use serenity::model::prelude::interaction::application_command::{
    CommandDataOption,
    CommandDataOptionValue,
};
use serenity::model::prelude::{ChannelType, GuildId};
use serenity::prelude::Context;

pub fn register(
    command: &mut builder::CreateApplicationCommand,
) -> &mut builder::CreateApplicationCommand {
    command
        .name("create-channel")
        .description("Create a channel if the name is not taken yet")
        .create_option(|option| {
            option
                .name("name")
                .description("Name for the new channel")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("type")
                .description("Kind of channel to create, text if omitted")
                .kind(CommandOptionType::String)
                .required(false)
                .add_string_choice("text", "text")
                .add_string_choice("voice", "voice")
                .add_string_choice("category", "category")
        })
}

fn string_option<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    let option = options.iter().find(|option| option.name == name)?;
    if let Some(CommandDataOptionValue::String(value)) = option.resolved.as_ref() {
        Some(value.as_str())
    } else {
        None
    }
}

fn channel_kind(value: Option<&str>) -> ChannelType {
    match value {
        Some("voice") => ChannelType::Voice,
        Some("category") => ChannelType::Category,
        _ => ChannelType::Text,
    }
}

pub async fn run(ctx: &Context, guild_id: GuildId, options: &[CommandDataOption]) -> String {
    let Some(name) = string_option(options, "name") else {
        return "Give the new channel a name.".to_string();
    };
    let kind = channel_kind(string_option(options, "type"));

    let existing = match guild_id.channels(&ctx.http).await {
        Ok(channels) => channels,
        Err(error) => {
            error!("Failed to list channels for guild {}: {}", guild_id, error);
            return "Could not list this server's channels.".to_string();
        }
    };
    if existing.values().any(|channel| channel.name == name) {
        return format!("A channel named **{}** already exists.", name);
    }

    let result = guild_id
        .create_channel(&ctx.http, |channel| channel.name(name).kind(kind))
        .await;
    match result {
        Ok(channel) => format!("Created **{}**.", channel.name),
        Err(error) => {
            error!("Failed to create channel {}: {}", name, error);
            format!("Could not create **{}**.", name)
        }
    }
}
