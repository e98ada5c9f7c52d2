use poise::serenity_prelude as serenity;

use crate::{CommandMeta, quiet_reply};
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};
use warden_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "nick",
    desc: "Change or clear a member's nickname.",
    category: "moderation",
    usage: "/nick <member> [new_nick]",
};

pub const MAX_NICK_CHARS: usize = 32;

/// Normalised nickname; `None` clears it.
pub fn normalize_nick(raw: Option<&str>) -> Result<Option<String>, CommandFailure> {
    let Some(nick) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    if nick.chars().count() > MAX_NICK_CHARS {
        return Err(CommandFailure::rejected(format!(
            "Nicknames can be at most {MAX_NICK_CHARS} characters."
        )));
    }

    Ok(Some(nick.to_owned()))
}

/// Change or clear a member's nickname
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_NICKNAMES"
)]
pub async fn nick(
    ctx: Context<'_>,
    #[description = "The member to rename"] member: serenity::Member,
    #[description = "New nickname (leave empty to clear)"]
    #[max_length = 32]
    new_nick: Option<String>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let nick = normalize_nick(new_nick.as_deref())?;

    // An empty nickname resets it to the account name.
    let edit = serenity::EditMember::new().nickname(nick.clone().unwrap_or_default());
    guild_id
        .edit_member(ctx.http(), member.user.id, edit)
        .await
        .or_action_failure("I couldn't change that nickname. Check role hierarchy and my permissions.")?;

    let reply = match &nick {
        Some(nick) => format!("✅ Nickname for <@{}> set to **{}**.", member.user.id.get(), nick),
        None => format!("✅ Nickname for <@{}> cleared.", member.user.id.get()),
    };
    ctx.send(quiet_reply(reply)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Nickname changed", DEFAULT_EMBED_COLOR)
            .field("Member", user_label(&member.user))
            .field("New nickname", nick.unwrap_or_else(|| "Cleared".to_owned()))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::normalize_nick;

    #[test]
    fn absent_or_blank_clears() {
        assert_eq!(normalize_nick(None).ok(), Some(None));
        assert_eq!(normalize_nick(Some("   ")).ok(), Some(None));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let exactly_max = "é".repeat(32);
        assert_eq!(normalize_nick(Some(&exactly_max)).ok(), Some(Some(exactly_max.clone())));
        assert!(normalize_nick(Some(&"a".repeat(33))).is_err());
    }
}
