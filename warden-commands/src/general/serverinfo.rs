use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::require_guild;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_DANGER;
use warden_utils::time::discord_timestamp;

pub const SERVERINFO_META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "Show details about this server.",
    category: "general",
    usage: "/serverinfo",
};

pub const MEMBERCOUNT_META: CommandMeta = CommandMeta {
    name: "membercount",
    desc: "Show how many members this server has.",
    category: "general",
    usage: "/membercount",
};

fn count_label(count: Option<u64>) -> String {
    count.map_or_else(|| "Unknown".to_owned(), |count| count.to_string())
}

/// Show details about this server
#[poise::command(slash_command, category = "General")]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let guild = guild_id
        .to_partial_guild_with_counts(ctx.http())
        .await
        .or_action_failure("I couldn't load this server's details.")?;
    let channel_count = guild_id
        .channels(ctx.http())
        .await
        .or_action_failure("I couldn't list this server's channels.")?
        .len();

    let mut embed = serenity::CreateEmbed::new()
        .title(guild.name.clone())
        .description(
            guild
                .description
                .clone()
                .unwrap_or_else(|| "No description".to_owned()),
        )
        .color(COLOR_DANGER)
        .field("ID", guild_id.get().to_string(), true)
        .field(
            "Created",
            discord_timestamp(guild_id.created_at().unix_timestamp(), 'D'),
            true,
        )
        .field("Members", count_label(guild.approximate_member_count), true)
        .field("Channels", channel_count.to_string(), true);

    if let Some(icon) = guild.icon_url() {
        embed = embed.thumbnail(icon);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show how many members this server has
#[poise::command(slash_command, category = "General")]
pub async fn membercount(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let cached = ctx.guild().map(|guild| guild.member_count);
    let count = match cached {
        Some(count) => count,
        None => guild_id
            .to_partial_guild_with_counts(ctx.http())
            .await
            .or_action_failure("I couldn't load this server's member count.")?
            .approximate_member_count
            .unwrap_or(0),
    };

    ctx.say(format!("This server has {count} members.")).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::count_label;

    #[test]
    fn missing_counts_read_as_unknown() {
        assert_eq!(count_label(None), "Unknown");
        assert_eq!(count_label(Some(42)), "42");
    }
}
