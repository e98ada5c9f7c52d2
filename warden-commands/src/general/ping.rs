use warden_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Show the gateway latency.",
    category: "general",
    usage: "/ping",
};

/// Show the gateway latency
#[poise::command(slash_command, category = "General")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format!("Pong! 🏓 Latency: {} ms", latency.as_millis()))
        .await?;
    Ok(())
}
