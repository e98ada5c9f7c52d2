use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{channel_mention, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_GOLD;
use warden_utils::formatting::format_compact_duration;

pub const META: CommandMeta = CommandMeta {
    name: "slowmode",
    desc: "Set this channel's slowmode in seconds (0 turns it off).",
    category: "moderation",
    usage: "/slowmode [seconds]",
};

/// Discord's slowmode ceiling, six hours.
pub const MAX_SLOWMODE_SECS: u16 = 21_600;

pub fn slowmode_label(seconds: u16) -> String {
    if seconds == 0 {
        "off".to_owned()
    } else {
        format_compact_duration(u64::from(seconds))
    }
}

/// Set this channel's slowmode
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_CHANNELS"
)]
pub async fn slowmode(
    ctx: Context<'_>,
    #[description = "Seconds between messages (0 turns it off)"]
    #[min = 0]
    #[max = 21600]
    seconds: Option<u16>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let channel_id = ctx.channel_id();
    let seconds = seconds.unwrap_or(0).min(MAX_SLOWMODE_SECS);

    channel_id
        .edit(
            ctx.http(),
            serenity::EditChannel::new().rate_limit_per_user(seconds),
        )
        .await
        .or_action_failure("I couldn't change this channel's slowmode.")?;

    let label = slowmode_label(seconds);
    ctx.send(
        poise::CreateReply::default()
            .content(format!("⏱️ Slowmode set to {label}."))
            .ephemeral(true),
    )
    .await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Slowmode changed", COLOR_GOLD)
            .field("Channel", channel_mention(channel_id))
            .field("Slowmode", label)
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::slowmode_label;

    #[test]
    fn zero_reads_as_off() {
        assert_eq!(slowmode_label(0), "off");
        assert_eq!(slowmode_label(30), "30s");
    }
}
