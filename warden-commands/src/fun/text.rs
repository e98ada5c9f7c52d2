use crate::{CommandMeta, quiet_reply};
use warden_core::{Context, Error};
use warden_utils::text::{mock_text, reverse_text};

pub const REVERSE_META: CommandMeta = CommandMeta {
    name: "reverse",
    desc: "Reverse some text.",
    category: "fun",
    usage: "/reverse <text>",
};

pub const MOCK_META: CommandMeta = CommandMeta {
    name: "mock",
    desc: "aLtErNaTe the case of some text.",
    category: "fun",
    usage: "/mock <text>",
};

/// Reverse some text
#[poise::command(slash_command, category = "Fun")]
pub async fn reverse(
    ctx: Context<'_>,
    #[description = "Text to reverse"]
    #[max_length = 2000]
    text: String,
) -> Result<(), Error> {
    ctx.send(quiet_reply(reverse_text(&text))).await?;
    Ok(())
}

/// Alternate the case of some text
#[poise::command(slash_command, category = "Fun")]
pub async fn mock(
    ctx: Context<'_>,
    #[description = "Text to mock"]
    #[max_length = 2000]
    text: String,
) -> Result<(), Error> {
    ctx.send(quiet_reply(mock_text(&text))).await?;
    Ok(())
}
