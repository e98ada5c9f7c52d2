use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{channel_mention, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};
use warden_utils::embed::{COLOR_CHANNEL, COLOR_SUCCESS};

pub const LOCK_META: CommandMeta = CommandMeta {
    name: "lock",
    desc: "Stop @everyone from sending messages in a channel.",
    category: "moderation",
    usage: "/lock [channel]",
};

pub const UNLOCK_META: CommandMeta = CommandMeta {
    name: "unlock",
    desc: "Let @everyone send messages in a channel again.",
    category: "moderation",
    usage: "/unlock [channel]",
};

/// The `@everyone` overwrite after toggling SEND_MESSAGES, keeping every
/// other bit of the existing overwrite.
pub fn everyone_send_overwrite(
    guild_id: serenity::GuildId,
    existing: &[serenity::PermissionOverwrite],
    allow_send: bool,
) -> serenity::PermissionOverwrite {
    let everyone = serenity::RoleId::new(guild_id.get());
    let kind = serenity::PermissionOverwriteType::Role(everyone);

    let (mut allow, mut deny) = existing
        .iter()
        .find(|overwrite| overwrite.kind == kind)
        .map_or(
            (serenity::Permissions::empty(), serenity::Permissions::empty()),
            |overwrite| (overwrite.allow, overwrite.deny),
        );

    if allow_send {
        allow.insert(serenity::Permissions::SEND_MESSAGES);
        deny.remove(serenity::Permissions::SEND_MESSAGES);
    } else {
        allow.remove(serenity::Permissions::SEND_MESSAGES);
        deny.insert(serenity::Permissions::SEND_MESSAGES);
    }

    serenity::PermissionOverwrite { allow, deny, kind }
}

async fn set_everyone_send(
    ctx: Context<'_>,
    guild_id: serenity::GuildId,
    channel: Option<serenity::Channel>,
    allow_send: bool,
) -> Result<serenity::ChannelId, Error> {
    let channel_id = channel.map_or(ctx.channel_id(), |channel| channel.id());

    let channel = channel_id
        .to_channel(ctx.http())
        .await
        .or_action_failure("I couldn't read that channel.")?
        .guild()
        .filter(|channel| channel.guild_id == guild_id)
        .ok_or_else(|| CommandFailure::rejected("Pick a channel in this server."))?;

    let overwrite = everyone_send_overwrite(guild_id, &channel.permission_overwrites, allow_send);
    channel_id
        .create_permission(ctx.http(), overwrite)
        .await
        .or_action_failure("I couldn't change that channel's permissions.")?;

    Ok(channel_id)
}

/// Stop @everyone from sending messages in a channel
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn lock(
    ctx: Context<'_>,
    #[description = "Channel to lock (defaults to this one)"] channel: Option<serenity::Channel>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let channel_id = set_everyone_send(ctx, guild_id, channel, false).await?;

    ctx.say(format!("🔒 {} is now locked.", channel_mention(channel_id)))
        .await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Channel locked", COLOR_CHANNEL)
            .field("Channel", channel_mention(channel_id))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

/// Let @everyone send messages in a channel again
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn unlock(
    ctx: Context<'_>,
    #[description = "Channel to unlock (defaults to this one)"] channel: Option<serenity::Channel>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let channel_id = set_everyone_send(ctx, guild_id, channel, true).await?;

    ctx.say(format!("🔓 {} is unlocked.", channel_mention(channel_id)))
        .await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Channel unlocked", COLOR_SUCCESS)
            .field("Channel", channel_mention(channel_id))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::everyone_send_overwrite;

    const GUILD: u64 = 42;

    fn everyone_overwrite(
        allow: serenity::Permissions,
        deny: serenity::Permissions,
    ) -> serenity::PermissionOverwrite {
        serenity::PermissionOverwrite {
            allow,
            deny,
            kind: serenity::PermissionOverwriteType::Role(serenity::RoleId::new(GUILD)),
        }
    }

    #[test]
    fn locking_without_overwrite_denies_send_only() {
        let overwrite = everyone_send_overwrite(serenity::GuildId::new(GUILD), &[], false);

        assert_eq!(overwrite.allow, serenity::Permissions::empty());
        assert_eq!(overwrite.deny, serenity::Permissions::SEND_MESSAGES);
    }

    #[test]
    fn locking_keeps_unrelated_bits() {
        let existing = [everyone_overwrite(
            serenity::Permissions::ADD_REACTIONS | serenity::Permissions::SEND_MESSAGES,
            serenity::Permissions::ATTACH_FILES,
        )];

        let overwrite = everyone_send_overwrite(serenity::GuildId::new(GUILD), &existing, false);

        assert_eq!(overwrite.allow, serenity::Permissions::ADD_REACTIONS);
        assert_eq!(
            overwrite.deny,
            serenity::Permissions::ATTACH_FILES | serenity::Permissions::SEND_MESSAGES
        );
    }

    #[test]
    fn unlocking_flips_send_back_to_allowed() {
        let existing = [everyone_overwrite(
            serenity::Permissions::empty(),
            serenity::Permissions::SEND_MESSAGES,
        )];

        let overwrite = everyone_send_overwrite(serenity::GuildId::new(GUILD), &existing, true);

        assert_eq!(overwrite.allow, serenity::Permissions::SEND_MESSAGES);
        assert!(overwrite.deny.is_empty());
    }

    #[test]
    fn member_overwrites_are_ignored() {
        let existing = [serenity::PermissionOverwrite {
            allow: serenity::Permissions::empty(),
            deny: serenity::Permissions::ATTACH_FILES,
            kind: serenity::PermissionOverwriteType::Member(serenity::UserId::new(7)),
        }];

        let overwrite = everyone_send_overwrite(serenity::GuildId::new(GUILD), &existing, false);

        assert_eq!(overwrite.deny, serenity::Permissions::SEND_MESSAGES);
    }
}
