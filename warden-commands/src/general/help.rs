use crate::general::embeds::{grouped_help_description, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use warden_core::{Context, Error};
use warden_utils::COMMAND_PREFIX;
use warden_utils::embed::titled_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List every command, optionally for one category.",
    category: "general",
    usage: "/help [category]",
};

/// List every command
#[poise::command(slash_command, category = "General")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Only show this category (general, moderation, fun)"] category: Option<String>,
) -> Result<(), Error> {
    let category = category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase);

    let categories = command_categories();
    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories))
            .await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    let embed = titled_embed("Help: commands")
        .description(grouped_help_description(&commands))
        .footer(poise::serenity_prelude::CreateEmbedFooter::new(format!(
            "Prefix: {COMMAND_PREFIX}  Type /help <category> to narrow the list"
        )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn command_categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
