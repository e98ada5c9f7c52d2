use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::require_guild;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::formatting::{MESSAGE_CHAR_LIMIT, join_within_limit};
use warden_utils::time::discord_timestamp;

pub const EMOJILIST_META: CommandMeta = CommandMeta {
    name: "emojilist",
    desc: "List this server's custom emojis.",
    category: "fun",
    usage: "/emojilist",
};

pub const ROLEINFO_META: CommandMeta = CommandMeta {
    name: "roleinfo",
    desc: "Show details about a role.",
    category: "fun",
    usage: "/roleinfo <role>",
};

pub const CHANNELINFO_META: CommandMeta = CommandMeta {
    name: "channelinfo",
    desc: "Show details about a channel.",
    category: "fun",
    usage: "/channelinfo [channel]",
};

pub fn channel_kind_label(kind: serenity::ChannelType) -> &'static str {
    match kind {
        serenity::ChannelType::Text => "Text",
        serenity::ChannelType::Private => "Direct message",
        serenity::ChannelType::Voice => "Voice",
        serenity::ChannelType::GroupDm => "Group DM",
        serenity::ChannelType::Category => "Category",
        serenity::ChannelType::News => "Announcement",
        serenity::ChannelType::NewsThread => "Announcement thread",
        serenity::ChannelType::PublicThread => "Public thread",
        serenity::ChannelType::PrivateThread => "Private thread",
        serenity::ChannelType::Stage => "Stage",
        serenity::ChannelType::Directory => "Directory",
        serenity::ChannelType::Forum => "Forum",
        _ => "Other",
    }
}

/// List this server's custom emojis
#[poise::command(slash_command, category = "Fun")]
pub async fn emojilist(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let emojis = guild_id
        .emojis(ctx.http())
        .await
        .or_action_failure("I couldn't load this server's emojis.")?;

    let reply = if emojis.is_empty() {
        "This server has no custom emojis.".to_owned()
    } else {
        join_within_limit(
            emojis.iter().map(ToString::to_string),
            " ",
            MESSAGE_CHAR_LIMIT,
        )
    };

    ctx.say(reply).await?;
    Ok(())
}

/// Show details about a role
#[poise::command(slash_command, category = "Fun")]
pub async fn roleinfo(
    ctx: Context<'_>,
    #[description = "The role to inspect"] role: serenity::Role,
) -> Result<(), Error> {
    let member_count = ctx.guild().map(|guild| {
        guild
            .members
            .values()
            .filter(|member| member.roles.contains(&role.id))
            .count()
    });

    let color = match role.colour.0 {
        0 => DEFAULT_EMBED_COLOR,
        value => value,
    };

    let embed = serenity::CreateEmbed::new()
        .title(format!("Role: {}", role.name))
        .color(color)
        .field("ID", role.id.get().to_string(), true)
        .field(
            "Members",
            member_count.map_or_else(|| "Unknown".to_owned(), |count| count.to_string()),
            true,
        )
        .field(
            "Created",
            discord_timestamp(role.id.created_at().unix_timestamp(), 'D'),
            true,
        );

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show details about a channel
#[poise::command(slash_command, category = "Fun")]
pub async fn channelinfo(
    ctx: Context<'_>,
    #[description = "Channel to inspect (defaults to this one)"] channel: Option<serenity::Channel>,
) -> Result<(), Error> {
    let channel = match channel {
        Some(channel) => channel,
        None => ctx
            .channel_id()
            .to_channel(ctx.http())
            .await
            .or_action_failure("I couldn't read this channel.")?,
    };

    let (name, kind) = match &channel {
        serenity::Channel::Guild(channel) => (channel.name.clone(), channel.kind),
        serenity::Channel::Private(channel) => (channel.name(), channel.kind),
        _ => ("Unknown".to_owned(), serenity::ChannelType::Unknown(0)),
    };

    let embed = serenity::CreateEmbed::new()
        .title(format!("Channel: {name}"))
        .color(DEFAULT_EMBED_COLOR)
        .field("ID", channel.id().get().to_string(), true)
        .field("Type", channel_kind_label(kind), true);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::channel_kind_label;

    #[test]
    fn labels_common_channel_kinds() {
        assert_eq!(channel_kind_label(serenity::ChannelType::Text), "Text");
        assert_eq!(channel_kind_label(serenity::ChannelType::Voice), "Voice");
        assert_eq!(channel_kind_label(serenity::ChannelType::Unknown(99)), "Other");
    }
}
