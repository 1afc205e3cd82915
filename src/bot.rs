use crate::commands::{self, status::StatusRequest, Command, Reply};
use crate::config::Config;
use crate::error::Result;
use crate::formatter::{self, Invoker};
use crate::moderation;
use crate::tasks;
use crate::types::{Data, Error};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

pub async fn run() -> Result<()> {
    // Fails before any connection attempt when the token is missing
    let config = Config::from_env()?;

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("banscope/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let token = config.discord_token.clone();
    let data = Data::new(config, http_client);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |context, event, framework, data| {
                Box::pin(event_handler(context, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |context, ready, _framework| {
            Box::pin(async move {
                info!(
                    user = %ready.user.name,
                    guilds = ready.guilds.len(),
                    channel = %data.allowed_channel(),
                    "Connected to Discord"
                );

                // setup runs once, after the first Ready
                tasks::spawn_keep_alive(
                    data.http_client.clone(),
                    tasks::KEEP_ALIVE_URL.to_string(),
                    tasks::KEEP_ALIVE_INTERVAL,
                );
                tasks::spawn_presence_updater(context.clone(), tasks::PRESENCE_INTERVAL);

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents).framework(framework).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await?;

    Ok(())
}

async fn event_handler(
    context: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> std::result::Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        handle_message(context, new_message, data).await;
    }
    Ok(())
}

/// Moderate, route and answer one inbound message.
async fn handle_message(context: &serenity::Context, message: &serenity::Message, data: &Data) {
    let allowed = data.allowed_channel();

    if !moderation::enforce(context, message, allowed).await {
        return;
    }

    let Some(command) = commands::parse(&message.content) else {
        return;
    };

    let reply = match command {
        Command::SetLanguage(code) => {
            commands::set_language(&data.languages, message.author.id.get(), code).await
        }
        Command::CheckStatus(uid) => {
            let request = StatusRequest {
                channel: message.channel_id,
                invoker: Invoker {
                    user_id: message.author.id.get(),
                    avatar_url: message.author.face(),
                },
                timestamp: message.timestamp,
                uid,
            };
            commands::check_status(&data.languages, &data.status_client, allowed, &request).await
        }
    };

    if let Err(e) = send_reply(context, message.channel_id, reply).await {
        error!(channel = %message.channel_id, error = %e, "Failed to send reply");
    }
}

async fn send_reply(
    context: &serenity::Context,
    channel: serenity::ChannelId,
    reply: Reply,
) -> Result<()> {
    match reply {
        Reply::Text(text) => {
            channel.say(&context.http, text).await?;
        }
        Reply::Card(card) => {
            channel
                .send_message(&context.http, serenity::CreateMessage::new().embed(card.to_embed()))
                .await?;
        }
        Reply::NotAllowed(allowed) => {
            channel
                .send_message(
                    &context.http,
                    serenity::CreateMessage::new().embed(formatter::not_allowed_embed(allowed)),
                )
                .await?;
        }
    }
    Ok(())
}
