use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{moderation_action_embed, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_WARNING;
use warden_utils::formatting::format_compact_duration;
use warden_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "mute",
    desc: "Time out a member for a number of minutes (default 10).",
    category: "moderation",
    usage: "/mute <member> [minutes]",
};

const DEFAULT_MUTE_MINUTES: u32 = 10;
/// Discord caps timeouts at 28 days.
pub const MAX_MUTE_MINUTES: u32 = 28 * 24 * 60;

/// Unix time at which a mute of `minutes` starting at `now` ends.
pub fn mute_expiry(now: u64, minutes: u32) -> u64 {
    now + u64::from(minutes) * 60
}

/// Time out a member for a number of minutes
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "The member to mute"] member: serenity::Member,
    #[description = "Duration in minutes (default 10)"]
    #[min = 1]
    #[max = 40320]
    minutes: Option<u32>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let minutes = minutes.unwrap_or(DEFAULT_MUTE_MINUTES).clamp(1, MAX_MUTE_MINUTES);
    let until = serenity::Timestamp::from_unix_timestamp(mute_expiry(now_unix_secs(), minutes) as i64)?;

    let edit = serenity::EditMember::new()
        .disable_communication_until_datetime(until)
        .audit_log_reason("Muted by moderator command");
    guild_id
        .edit_member(ctx.http(), member.user.id, edit)
        .await
        .or_action_failure("I couldn't mute that member. Check role hierarchy and my permissions.")?;

    let duration_label = format_compact_duration(u64::from(minutes) * 60);
    let embed = moderation_action_embed(
        &member.user,
        "muted",
        None,
        Some(&duration_label),
        COLOR_WARNING,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Member muted", COLOR_WARNING)
            .field("Member", user_label(&member.user))
            .field("Duration", format!("{minutes} minutes"))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MAX_MUTE_MINUTES, mute_expiry};

    #[test]
    fn expiry_is_minutes_after_now() {
        assert_eq!(mute_expiry(1_000, 10), 1_600);
        assert_eq!(mute_expiry(0, MAX_MUTE_MINUTES), 28 * 24 * 60 * 60);
    }
}
