use warden_core::{Context, Error};

use crate::{CommandMeta, quiet_reply};

pub const META: CommandMeta = CommandMeta {
    name: "say",
    desc: "Repeat a message.",
    category: "general",
    usage: "/say <message>",
};

/// Repeat a message
#[poise::command(slash_command, category = "General")]
pub async fn say(
    ctx: Context<'_>,
    #[description = "What to say"]
    #[max_length = 2000]
    message: String,
) -> Result<(), Error> {
    ctx.send(quiet_reply(message)).await?;
    Ok(())
}
