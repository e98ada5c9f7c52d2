use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{
    moderation_action_embed, reason_or_default, require_guild, user_label,
};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_DANGER;

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    desc: "Ban a member from the server.",
    category: "moderation",
    usage: "/ban <member> [reason]",
};

/// Messages from the banned member are kept.
const DELETE_MESSAGE_DAYS: u8 = 0;

/// Ban a member from the server
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The member to ban"] member: serenity::Member,
    #[description = "Reason for the ban"]
    #[max_length = 512]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let reason = reason_or_default(reason.as_deref());

    guild_id
        .ban_with_reason(ctx.http(), member.user.id, DELETE_MESSAGE_DAYS, &reason)
        .await
        .or_action_failure("I couldn't ban that member. Check role hierarchy and my permissions.")?;

    let embed = moderation_action_embed(&member.user, "banned", Some(&reason), None, COLOR_DANGER);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Member banned", COLOR_DANGER)
            .field("Member", user_label(&member.user))
            .field("Moderator", user_label(ctx.author()))
            .field("Reason", reason),
    )
    .await;

    Ok(())
}
