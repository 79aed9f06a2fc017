#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unreadable_literal)]

use serenity::{prelude::GatewayIntents, Client};
use std::env;
use tracing::{error, info};

mod common;
mod events;
mod models;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let log_level = match env::var("DEBUG").unwrap_or(false.to_string()).as_str() {
        "true" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Getting environment variables");
    let discord_token = match env::var("DISCORD_TOKEN") {
        Ok(token) if !token.trim().is_empty() => token,
        _ => {
            error!("DISCORD_TOKEN is not set, refusing to start");
            std::process::exit(1);
        }
    };
    let config = match models::config::ReactionRoleConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load the reaction role configuration: {err}");
            std::process::exit(1);
        }
    };

    let handler = models::handler::Handler { config };
    // Member lookups need the members intent; reaction events are in the
    // non-privileged set.
    let intents = GatewayIntents::non_privileged() | GatewayIntents::GUILD_MEMBERS;
    let mut client = match Client::builder(&discord_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Could not build the Discord client. Failed with error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = client.start().await {
        error!(
            "Attempted to start the Discord client, but failed with error: {}",
            err
        );
        std::process::exit(1);
    }
}
