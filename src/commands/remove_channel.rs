use log::error;
use serenity::builder;
use serenity::model::prelude::command::CommandOptionType;
use serenity::model::prelude::interaction::application_command::{
    CommandDataOption,
    CommandDataOptionValue,
};
use serenity::model::prelude::PartialChannel;
use serenity::prelude::Context;

pub fn register(
    command: &mut builder::CreateApplicationCommand,
) -> &mut builder::CreateApplicationCommand {
    command
        .name("remove-channel")
        .description("Delete one specific channel")
        .create_option(|option| {
            option
                .name("channel")
                .description("The channel to delete")
                .kind(CommandOptionType::Channel)
                .required(true)
        })
}

fn channel_option(options: &[CommandDataOption]) -> Option<&PartialChannel> {
    let option = options.get(0)?;
    if let Some(CommandDataOptionValue::Channel(channel)) = option.resolved.as_ref() {
        Some(channel)
    } else {
        None
    }
}

pub async fn run(ctx: &Context, options: &[CommandDataOption]) -> String {
    let Some(channel) = channel_option(options) else {
        return "Pick a channel to remove.".to_string();
    };
    let label = channel
        .name
        .clone()
        .unwrap_or_else(|| channel.id.to_string());

    match channel.id.delete(&ctx.http).await {
        Ok(_) => format!("Deleted **{}**.", label),
        Err(error) => {
            error!("Failed to delete channel {}: {}", label, error);
            format!("Could not delete **{}**.", label)
        }
    }
}
