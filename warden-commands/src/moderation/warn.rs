use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{
    moderation_action_embed, reason_or_default, require_guild, user_label,
};
use crate::moderation::gate::moderator_check;
use warden_core::{Context, Error};
use warden_utils::embed::COLOR_WARNING;

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Record a warning against a member.",
    category: "moderation",
    usage: "/warn <member> [reason]",
};

/// Record a warning against a member
#[poise::command(slash_command, category = "Moderation", check = "moderator_check")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The member to warn"] member: serenity::Member,
    #[description = "Reason for the warning"]
    #[max_length = 512]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let reason = reason_or_default(reason.as_deref());
    let (record, count) = ctx.data().ledger.record_numbered_warning(
        guild_id.get(),
        member.user.id.get(),
        ctx.author().id.get(),
        Some(&reason),
    );

    let embed = moderation_action_embed(
        &member.user,
        "warned",
        Some(&record.reason),
        None,
        COLOR_WARNING,
    )
    .footer(serenity::CreateEmbedFooter::new(format!("Warning #{count}")));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Member warned", COLOR_WARNING)
            .field("Member", user_label(&member.user))
            .field("Reason", record.reason)
            .field("Moderator", user_label(ctx.author()))
            .field("Total warnings", count.to_string()),
    )
    .await;

    Ok(())
}
