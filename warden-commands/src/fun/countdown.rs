use std::time::Duration;

use poise::serenity_prelude as serenity;
use tokio::time::sleep;

use crate::CommandMeta;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "countdown",
    desc: "Count down from up to 3600 seconds, editing the message each second.",
    category: "fun",
    usage: "/countdown <seconds>",
};

pub const MAX_COUNTDOWN_SECS: u32 = 3_600;
const TICK: Duration = Duration::from_secs(1);
const FINISHED: &str = "⏰ Time's up!";

pub fn countdown_label(remaining: u32) -> String {
    format!("⏳ Countdown: {remaining}s")
}

/// Count down, editing the message each second
#[poise::command(slash_command, category = "Fun")]
pub async fn countdown(
    ctx: Context<'_>,
    #[description = "Seconds to count down from (1-3600)"]
    #[min = 1]
    #[max = 3600]
    seconds: u32,
) -> Result<(), Error> {
    if !(1..=MAX_COUNTDOWN_SECS).contains(&seconds) {
        return Err(CommandFailure::rejected(format!(
            "Pick a number of seconds between 1 and {MAX_COUNTDOWN_SECS}."
        ))
        .into());
    }

    let handle = ctx.say(countdown_label(seconds)).await?;
    // Interaction tokens expire after 15 minutes; edit the message directly.
    let mut message = handle.message().await?.into_owned();

    for remaining in (1..seconds).rev() {
        sleep(TICK).await;
        message
            .edit(ctx.http(), serenity::EditMessage::new().content(countdown_label(remaining)))
            .await
            .or_action_failure("The countdown message disappeared.")?;
    }

    sleep(TICK).await;
    message
        .edit(ctx.http(), serenity::EditMessage::new().content(FINISHED))
        .await
        .or_action_failure("The countdown message disappeared.")?;

    Ok(())
}
