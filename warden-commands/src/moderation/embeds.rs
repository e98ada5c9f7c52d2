use poise::serenity_prelude as serenity;

use warden_core::{CommandFailure, Context};
use warden_ledger::REASON_NOT_PROVIDED;
use warden_utils::formatting::{escape_mentions, truncate_chars};

/// `name (id)` label used in audit records.
pub fn user_label(user: &serenity::User) -> String {
    format!("{} ({})", user.tag(), user.id.get())
}

pub fn channel_mention(channel_id: serenity::ChannelId) -> String {
    format!("<#{}>", channel_id.get())
}

/// Discord's audit log reason limit.
pub const MAX_REASON_CHARS: usize = 512;

/// Trimmed reason capped at [`MAX_REASON_CHARS`], or the shared placeholder
/// when none was given.
pub fn reason_or_default(reason: Option<&str>) -> String {
    let reason = reason
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(REASON_NOT_PROVIDED);
    truncate_chars(reason, MAX_REASON_CHARS)
}

pub fn require_guild(ctx: Context<'_>) -> Result<serenity::GuildId, CommandFailure> {
    ctx.guild_id().ok_or_else(CommandFailure::guild_only)
}

pub fn moderation_action_embed(
    target: &serenity::User,
    action_past_tense: &str,
    reason: Option<&str>,
    duration: Option<&str>,
    color: u32,
) -> serenity::CreateEmbed {
    let mut lines = vec![format!("**Target :** <@{}>", target.id.get())];

    if let Some(reason) = reason {
        lines.push(format!("**Reason :** {}", escape_mentions(reason)));
    }

    if let Some(duration) = duration {
        lines.push(format!("**Duration :** {}", duration));
    }

    let display_name = target
        .global_name
        .clone()
        .unwrap_or_else(|| target.name.clone());

    serenity::CreateEmbed::new()
        .color(color)
        .author(
            serenity::CreateEmbedAuthor::new(format!("✅ {} has been {}", display_name, action_past_tense))
                .icon_url(target.face()),
        )
        .description(lines.join("\n"))
}
