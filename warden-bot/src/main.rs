mod config;

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use warden_core::error::{
    GUILD_ONLY_REPLY, MISSING_PERMISSION_REPLY, MODERATORS_ONLY_REPLY, UNKNOWN_COMMAND_REPLY,
    argument_reply, error_reply, missing_bot_permissions_reply,
};
use warden_core::{CommandFailure, Context, Data, Error};
use warden_ledger::MemoryLedger;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    info!(
        guild_id = config.guild_id.map(|id| id.get()),
        activity = %config.activity,
        "configuration loaded"
    );

    let Config {
        token,
        guild_id,
        activity,
        credits,
    } = config;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: warden_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(warden_utils::COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                let commands = &framework.options().commands;
                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                        info!(
                            count = commands.len(),
                            guild_id = guild_id.get(),
                            "registered commands in guild"
                        );
                    }
                    None => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        info!(count = commands.len(), "registered commands globally");
                    }
                }

                ctx.set_activity(Some(serenity::ActivityData::playing(activity)));
                info!(user = %ready.user.name, guilds = ready.guilds.len(), "Warden is ready");

                Ok(Data::new(Arc::new(MemoryLedger::new()), credits))
            })
        })
        .build();

    info!("Warden is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

/// Send an invoker-only reply, logging when it cannot be delivered.
async fn reply_ephemeral(ctx: Context<'_>, content: String) {
    if let Err(source) = ctx
        .send(
            poise::CreateReply::default()
                .content(content)
                .ephemeral(true),
        )
        .await
    {
        error!(
            ?source,
            command = %ctx.command().qualified_name,
            "failed to deliver error reply"
        );
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command = &ctx.command().qualified_name;
            match error.downcast_ref::<CommandFailure>() {
                Some(CommandFailure::Rejected(message)) => {
                    debug!(%command, %message, "command input rejected");
                }
                Some(CommandFailure::Action { message, source }) => {
                    warn!(?source, %command, %message, "platform rejected command action");
                }
                None => {
                    error!(?error, %command, "command error");
                }
            }

            reply_ephemeral(ctx, error_reply(&error)).await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, error, .. } => {
            debug!(
                ?error,
                command = %ctx.command().qualified_name,
                "argument binding failed"
            );
            reply_ephemeral(ctx, argument_reply(input.as_deref())).await;
        }
        poise::FrameworkError::CommandCheckFailed { ctx, error, .. } => {
            if let Some(error) = error {
                error!(
                    ?error,
                    command = %ctx.command().qualified_name,
                    "moderator check failed to run"
                );
            }
            reply_ephemeral(ctx, MODERATORS_ONLY_REPLY.to_owned()).await;
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            reply_ephemeral(ctx, MISSING_PERMISSION_REPLY.to_owned()).await;
        }
        poise::FrameworkError::MissingBotPermissions {
            ctx,
            missing_permissions,
            ..
        } => {
            warn!(
                %missing_permissions,
                command = %ctx.command().qualified_name,
                "bot is missing permissions"
            );
            reply_ephemeral(ctx, missing_bot_permissions_reply(missing_permissions)).await;
        }
        poise::FrameworkError::GuildOnly { ctx, .. } => {
            reply_ephemeral(ctx, GUILD_ONLY_REPLY.to_owned()).await;
        }
        poise::FrameworkError::UnknownInteraction {
            ctx, interaction, ..
        } => {
            warn!(command = %interaction.data.name, "received an unregistered command");

            let response = serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(UNKNOWN_COMMAND_REPLY)
                    .ephemeral(true),
            );
            if let Err(source) = interaction.create_response(ctx, response).await {
                error!(?source, "failed to deliver unknown command reply");
            }
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            if let Err(source) = poise::builtins::on_error(other).await {
                error!(?source, "failed to handle framework error");
            }
        }
    }
}
