use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{
    moderation_action_embed, reason_or_default, require_guild, user_label,
};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_WARNING;

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a member from the server.",
    category: "moderation",
    usage: "/kick <member> [reason]",
};

/// Kick a member from the server
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] member: serenity::Member,
    #[description = "Reason for the kick"]
    #[max_length = 512]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let reason = reason_or_default(reason.as_deref());

    guild_id
        .kick_with_reason(ctx.http(), member.user.id, &reason)
        .await
        .or_action_failure("I couldn't kick that member. Check role hierarchy and my permissions.")?;

    let embed = moderation_action_embed(&member.user, "kicked", Some(&reason), None, COLOR_WARNING);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Member kicked", COLOR_WARNING)
            .field("Member", user_label(&member.user))
            .field("Moderator", user_label(ctx.author()))
            .field("Reason", reason),
    )
    .await;

    Ok(())
}
