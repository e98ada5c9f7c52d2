use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::audit::{AuditRecord, audit};
use crate::moderation::embeds::{moderation_action_embed, require_guild, user_label};
use crate::moderation::gate::moderator_check;
use warden_core::{ActionResultExt, CommandFailure, Context, Error};
use warden_utils::embed::COLOR_SUCCESS;
use warden_utils::parse::{UserIdentifier, parse_user_identifier, tag_matches};

pub const META: CommandMeta = CommandMeta {
    name: "unban",
    desc: "Lift a ban by user ID or name#1234 tag.",
    category: "moderation",
    usage: "/unban <user_id|name#1234>",
};

/// Lift a ban by user ID or name#1234 tag
#[poise::command(
    slash_command,
    category = "Moderation",
    check = "moderator_check",
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "User ID or name#1234"] identifier: String,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;

    let Some(identifier) = parse_user_identifier(&identifier) else {
        return Err(CommandFailure::rejected("Give a user ID or a name#1234 tag.").into());
    };

    let user = match identifier {
        UserIdentifier::Id(user_id) => ctx
            .http()
            .get_user(serenity::UserId::new(user_id))
            .await
            .or_action_failure("I couldn't find a user with that ID.")?,
        UserIdentifier::Tag {
            name,
            discriminator,
        } => {
            let bans = guild_id
                .bans(ctx.http(), None, None)
                .await
                .or_action_failure("I couldn't read the ban list.")?;

            bans.into_iter()
                .map(|ban| ban.user)
                .find(|user| {
                    tag_matches(
                        &user.name,
                        user.discriminator.map(|value| value.get()),
                        &name,
                        &discriminator,
                    )
                })
                .ok_or_else(|| CommandFailure::rejected("That user isn't in the ban list."))?
        }
    };

    guild_id
        .unban(ctx.http(), user.id)
        .await
        .or_action_failure("I couldn't unban that user. They may not be banned.")?;

    let embed = moderation_action_embed(&user, "unbanned", None, None, COLOR_SUCCESS);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    audit(
        ctx,
        guild_id,
        AuditRecord::new("Ban lifted", COLOR_SUCCESS)
            .field("User", user_label(&user))
            .field("Moderator", user_label(ctx.author())),
    )
    .await;

    Ok(())
}
