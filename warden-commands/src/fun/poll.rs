use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};
use warden_utils::embed::{COLOR_POLL, MAX_EMBED_TITLE_CHARS};
use warden_utils::formatting::{escape_mentions, truncate_chars};
use warden_utils::parse::split_options;

pub const META: CommandMeta = CommandMeta {
    name: "poll",
    desc: "Start a reaction poll with up to 10 space-separated options.",
    category: "fun",
    usage: "/poll <question> [options]",
};

pub const POLL_EMOJIS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

const DEFAULT_OPTIONS: [&str; 2] = ["Yes", "No"];

pub const MAX_QUESTION_CHARS: usize = 250;

/// Split poll options, defaulting to Yes/No. More options than there are
/// number emojis is rejected.
pub fn parse_poll_options(raw: Option<&str>) -> Result<Vec<String>, CommandFailure> {
    let options = split_options(raw.unwrap_or_default());

    if options.len() > POLL_EMOJIS.len() {
        return Err(CommandFailure::rejected(format!(
            "A poll can have at most {} options.",
            POLL_EMOJIS.len()
        )));
    }

    let options = if options.is_empty() {
        DEFAULT_OPTIONS.to_vec()
    } else {
        options
    };

    Ok(options.into_iter().map(str::to_owned).collect())
}

/// Build the poll embed title, rejecting questions over `MAX_QUESTION_CHARS`.
pub fn poll_title(question: &str) -> Result<String, CommandFailure> {
    let question = question.trim();

    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(CommandFailure::rejected(format!(
            "A poll question can be at most {MAX_QUESTION_CHARS} characters."
        )));
    }

    // mention escaping can add zero-width characters
    Ok(truncate_chars(
        &format!("Poll: {}", escape_mentions(question)),
        MAX_EMBED_TITLE_CHARS,
    ))
}

pub fn poll_description(options: &[String]) -> String {
    POLL_EMOJIS
        .iter()
        .zip(options)
        .map(|(emoji, option)| format!("{emoji} {}", escape_mentions(option)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Start a reaction poll
#[poise::command(slash_command, category = "Fun")]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "What to vote on"]
    #[max_length = 250]
    question: String,
    #[description = "Options separated by spaces (default Yes/No)"] options: Option<String>,
) -> Result<(), Error> {
    let title = poll_title(&question)?;
    let options = parse_poll_options(options.as_deref())?;

    ctx.defer().await?;

    let embed = serenity::CreateEmbed::new()
        .title(title)
        .description(poll_description(&options))
        .color(COLOR_POLL);
    let handle = ctx.send(poise::CreateReply::default().embed(embed)).await?;
    let message = handle.message().await?;

    for emoji in POLL_EMOJIS.iter().take(options.len()) {
        message
            .react(ctx.http(), serenity::ReactionType::Unicode((*emoji).to_owned()))
            .await
            .or_action_failure("I posted the poll but couldn't add its reactions.")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use warden_utils::embed::MAX_EMBED_TITLE_CHARS;

    use super::{MAX_QUESTION_CHARS, parse_poll_options, poll_description, poll_title};

    #[test]
    fn empty_options_default_to_yes_no() {
        assert_eq!(parse_poll_options(None).unwrap(), vec!["Yes", "No"]);
        assert_eq!(parse_poll_options(Some("   ")).unwrap(), vec!["Yes", "No"]);
    }

    #[test]
    fn ten_options_fit_eleven_do_not() {
        let ten = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let eleven = (1..=11).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");

        assert_eq!(parse_poll_options(Some(&ten)).unwrap().len(), 10);
        assert!(parse_poll_options(Some(&eleven)).is_err());
    }

    #[test]
    fn description_pairs_options_with_number_emojis() {
        let options = vec!["pizza".to_owned(), "tacos".to_owned()];
        assert_eq!(poll_description(&options), "1️⃣ pizza\n2️⃣ tacos");
    }

    #[test]
    fn question_length_is_capped_below_the_title_limit() {
        let longest = "q".repeat(MAX_QUESTION_CHARS);
        let title = poll_title(&longest).unwrap();

        assert_eq!(title, format!("Poll: {longest}"));
        assert!(title.chars().count() <= MAX_EMBED_TITLE_CHARS);
        assert!(poll_title(&"q".repeat(MAX_QUESTION_CHARS + 1)).is_err());
    }
}
