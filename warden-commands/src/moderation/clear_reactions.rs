use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};
use warden_utils::embed::COLOR_CHANNEL;
use warden_utils::parse::parse_snowflake;

pub const META: CommandMeta = CommandMeta {
    name: "clear_reactions",
    desc: "Remove every reaction from a message in this channel.",
    category: "moderation",
    usage: "/clear_reactions <message_id>",
};

pub fn message_link(
    guild_id: serenity::GuildId,
    channel_id: serenity::ChannelId,
    message_id: serenity::MessageId,
) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id.get(),
        channel_id.get(),
        message_id.get()
    )
}

/// Remove every reaction from a message
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear_reactions(
    ctx: Context<'_>,
    #[description = "ID of a message in this channel"] message_id: String,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let channel_id = ctx.channel_id();

    let message_id = parse_snowflake(&message_id)
        .map(serenity::MessageId::new)
        .ok_or_else(|| CommandFailure::rejected("That isn't a valid message ID."))?;

    channel_id
        .delete_reactions(ctx.http(), message_id)
        .await
        .or_action_failure("I couldn't clear reactions on that message. Is it in this channel?")?;

    ctx.send(
        poise::CreateReply::default()
            .content("✅ Reactions cleared.")
            .ephemeral(true),
    )
    .await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Reactions cleared", COLOR_CHANNEL)
            .field(
                "Message",
                format!("[Jump to message]({})", message_link(guild_id, channel_id, message_id)),
            )
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::message_link;

    #[test]
    fn builds_jump_link() {
        assert_eq!(
            message_link(
                serenity::GuildId::new(1),
                serenity::ChannelId::new(2),
                serenity::MessageId::new(3)
            ),
            "https://discord.com/channels/1/2/3"
        );
    }
}
