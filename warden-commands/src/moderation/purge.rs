use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{channel_mention, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_CHANNEL;
use warden_utils::purge::purge_recent_messages;

pub const META: CommandMeta = CommandMeta {
    name: "purge",
    desc: "Delete recent messages in this channel (1-1000).",
    category: "moderation",
    usage: "/purge <amount>",
};

/// Delete recent messages in this channel
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_MESSAGES | READ_MESSAGE_HISTORY"
)]
pub async fn purge(
    ctx: Context<'_>,
    #[description = "How many messages to delete"]
    #[min = 1]
    #[max = 1000]
    amount: u64,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let channel_id = ctx.channel_id();

    ctx.defer_ephemeral().await?;

    let deleted = purge_recent_messages(ctx.http(), channel_id, amount)
        .await
        .or_action_failure("I couldn't read this channel's message history.")?;

    ctx.say(format!("✅ Deleted {deleted} messages.")).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Messages purged", COLOR_CHANNEL)
            .field("Channel", channel_mention(channel_id))
            .field("Deleted", deleted.to_string())
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}
