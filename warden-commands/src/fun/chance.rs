use rand::Rng;
use rand::seq::IndexedRandom;

use crate::CommandMeta;
use warden_core::{CommandFailure, Context, Error};
use warden_utils::parse::split_options;

pub const EIGHTBALL_META: CommandMeta = CommandMeta {
    name: "8ball",
    desc: "Ask a question, get an answer.",
    category: "fun",
    usage: "/8ball <question>",
};

pub const COLOR_META: CommandMeta = CommandMeta {
    name: "color",
    desc: "Roll a number between 1 and max (default 100).",
    category: "fun",
    usage: "/color [max]",
};

pub const ROLL_META: CommandMeta = CommandMeta {
    name: "roll",
    desc: "Roll a number between 1 and max (default 100). Also works as a /roll message.",
    category: "fun",
    usage: "/roll [max]",
};

pub const FLIP_META: CommandMeta = CommandMeta {
    name: "flip",
    desc: "Flip a coin.",
    category: "fun",
    usage: "/flip",
};

pub const CHOOSE_META: CommandMeta = CommandMeta {
    name: "choose",
    desc: "Pick one of several space-separated options.",
    category: "fun",
    usage: "/choose <options>",
};

const DEFAULT_ROLL_MAX: u64 = 100;

pub const EIGHTBALL_ANSWERS: [&str; 20] = [
    "Yes.",
    "No.",
    "Maybe.",
    "Ask again later.",
    "Likely.",
    "I don't have an answer for that.",
    "Absolutely.",
    "Definitely not.",
    "The odds are good.",
    "The odds are bad.",
    "Cannot predict now.",
    "Ask again.",
    "Most likely yes.",
    "Probably not.",
    "Don't count on it.",
    "Yes, but only if...",
    "No, unless...",
    "The universe says no.",
    "Signs point to yes.",
    "Signs point to no.",
];

pub fn roll_dice<R: Rng>(rng: &mut R, max: u64) -> Result<u64, CommandFailure> {
    if max == 0 {
        return Err(CommandFailure::rejected("Give a positive number."));
    }
    Ok(rng.random_range(1..=max))
}

pub fn eight_ball_answer<R: Rng>(rng: &mut R) -> &'static str {
    EIGHTBALL_ANSWERS.choose(rng).copied().unwrap_or("Ask again.")
}

pub fn flip_coin<R: Rng>(rng: &mut R) -> &'static str {
    if rng.random_bool(0.5) { "Heads" } else { "Tails" }
}

pub fn choose_option<'a, R: Rng>(
    rng: &mut R,
    raw: &'a str,
) -> Result<&'a str, CommandFailure> {
    let options = split_options(raw);
    if options.len() < 2 {
        return Err(CommandFailure::rejected(
            "Give at least 2 options separated by spaces.",
        ));
    }

    options
        .choose(rng)
        .copied()
        .ok_or_else(|| CommandFailure::rejected("Give at least 2 options separated by spaces."))
}

fn roll_reply(max: Option<u64>) -> Result<String, CommandFailure> {
    let max = max.unwrap_or(DEFAULT_ROLL_MAX);
    let value = roll_dice(&mut rand::rng(), max)?;
    Ok(format!("🎲 Rolled: {value} / {max}"))
}

/// Ask a question, get an answer
#[poise::command(slash_command, rename = "8ball", category = "Fun")]
pub async fn eightball(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
) -> Result<(), Error> {
    let answer = eight_ball_answer(&mut rand::rng());
    ctx.send(crate::quiet_reply(format!("❓ {question}\n🎱 {answer}")))
        .await?;
    Ok(())
}

/// Roll a number between 1 and max
#[poise::command(slash_command, category = "Fun")]
pub async fn color(
    ctx: Context<'_>,
    #[description = "Highest possible roll (default 100)"]
    #[min = 1]
    max: Option<u64>,
) -> Result<(), Error> {
    let reply = roll_reply(max)?;
    ctx.say(reply).await?;
    Ok(())
}

/// Roll a number between 1 and max
#[poise::command(prefix_command, slash_command, category = "Fun")]
pub async fn roll(
    ctx: Context<'_>,
    #[description = "Highest possible roll (default 100)"]
    #[min = 1]
    max: Option<u64>,
) -> Result<(), Error> {
    let reply = roll_reply(max)?;
    ctx.say(reply).await?;
    Ok(())
}

/// Flip a coin
#[poise::command(slash_command, category = "Fun")]
pub async fn flip(ctx: Context<'_>) -> Result<(), Error> {
    let side = flip_coin(&mut rand::rng());
    ctx.say(format!("🪙 {side}")).await?;
    Ok(())
}

/// Pick one of several options
#[poise::command(slash_command, category = "Fun")]
pub async fn choose(
    ctx: Context<'_>,
    #[description = "Options separated by spaces"] options: String,
) -> Result<(), Error> {
    let picked = choose_option(&mut rand::rng(), &options)?.to_owned();
    ctx.send(crate::quiet_reply(format!("👉 I choose: **{picked}**")))
        .await?;
    Ok(())
}
