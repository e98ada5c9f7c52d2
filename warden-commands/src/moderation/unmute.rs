use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{moderation_action_embed, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, Context, Error};
use warden_utils::embed::COLOR_SUCCESS;

pub const META: CommandMeta = CommandMeta {
    name: "unmute",
    desc: "Remove a member's timeout.",
    category: "moderation",
    usage: "/unmute <member>",
};

/// Remove a member's timeout
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "The member to unmute"] member: serenity::Member,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let edit = serenity::EditMember::new()
        .enable_communication()
        .audit_log_reason("Unmuted by moderator command");
    guild_id
        .edit_member(ctx.http(), member.user.id, edit)
        .await
        .or_action_failure("I couldn't unmute that member. Check role hierarchy and my permissions.")?;

    let embed = moderation_action_embed(&member.user, "unmuted", None, None, COLOR_SUCCESS);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Mute lifted", COLOR_SUCCESS)
            .field("Member", user_label(&member.user))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}
