use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::COLOR_INFO;
use warden_utils::formatting::join_within_limit;
use warden_utils::time::discord_timestamp;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "userinfo",
    desc: "Show account and membership details for a user.",
    category: "general",
    usage: "/userinfo [user]",
};

const FIELD_VALUE_LIMIT: usize = 1024;

pub fn role_list(roles: &[serenity::RoleId]) -> String {
    if roles.is_empty() {
        return "None".to_owned();
    }

    join_within_limit(
        roles.iter().map(|role| format!("<@&{}>", role.get())),
        ", ",
        FIELD_VALUE_LIMIT,
    )
}

/// Show account and membership details for a user
#[poise::command(slash_command, category = "General")]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "Who to look up (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.unwrap_or_else(|| ctx.author().clone());

    let member = match ctx.guild_id() {
        Some(guild_id) => guild_id.member(ctx.http(), user.id).await.ok(),
        None => None,
    };

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("Info: {}", user.tag()))
        .color(COLOR_INFO)
        .thumbnail(user.face())
        .field("ID", user.id.get().to_string(), true)
        .field("Bot", if user.bot { "Yes" } else { "No" }, true)
        .field(
            "Registered",
            discord_timestamp(user.id.created_at().unix_timestamp(), 'f'),
            false,
        );

    if let Some(member) = member {
        let joined = member
            .joined_at
            .map_or_else(|| "Unknown".to_owned(), |at| discord_timestamp(at.unix_timestamp(), 'f'));
        embed = embed.field("Joined", joined, false).field(
            format!("Roles ({})", member.roles.len()),
            role_list(&member.roles),
            false,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
