mod commands;
use std::env;

use dotenv::dotenv;

use lazy_static::lazy_static;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::prelude::*;

mod cleanup;
mod config;
mod provision;
mod rules;
use config::CleanupConfig;

struct Bot {}

lazy_static! {
    static ref CONFIG: CleanupConfig = CleanupConfig::standard();
}

#[async_trait]
impl EventHandler for Bot {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            info!("Received command interaction: {}", command.data.name);

            let is_admin = command
                .member
                .as_ref()
                .and_then(|member| member.permissions)
                .map_or(false, |permissions| permissions.administrator());

            let content = match command.guild_id {
                None => "This command only works inside a server.".to_string(),
                Some(_) if !is_admin => {
                    "You need **Administrator** perms to run this.".to_string()
                }
                Some(guild_id) => match command.data.name.as_str() {
                    "clean-channels" => {
                        commands::clean_channels::run(&ctx, guild_id, &command.data.options, &CONFIG)
                            .await
                    }
                    "remove-channel" => {
                        commands::remove_channel::run(&ctx, &command.data.options).await
                    }
                    "create-channel" => {
                        commands::create_channel::run(&ctx, guild_id, &command.data.options).await
                    }
                    "create-defaults" => {
                        commands::create_defaults::run(&ctx, guild_id, &CONFIG).await
                    }
                    _ => "not implemented :(".to_string(),
                },
            };

            if let Err(why) = command
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| message.content(content).ephemeral(true))
                })
                .await
            {
                error!("Cannot respond to slash command: {}", why);
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        let registered = Command::set_global_application_commands(&ctx.http, |builder| {
            builder
                .create_application_command(|command| commands::clean_channels::register(command))
                .create_application_command(|command| commands::remove_channel::register(command))
                .create_application_command(|command| commands::create_channel::register(command))
                .create_application_command(|command| commands::create_defaults::register(command))
        })
        .await;

        // A failed sync is not fatal, any previously registered commands keep working.
        match registered {
            Ok(_) => info!("Slash commands registered"),
            Err(error) => error!("Error while creating commands: {}", error),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();
    env_logger::init();

    // Configure the client with your Discord bot token in the environment.
    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment");

    let bot = Bot {};

    // Build our client.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(token, intents)
        .event_handler(bot)
        .await
        .expect("Error creating client");

    // Finally, start a single shard, and start listening to events.
    //
    // Shards will automatically attempt to reconnect, and will perform
    // exponential backoff until it reconnects.
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
