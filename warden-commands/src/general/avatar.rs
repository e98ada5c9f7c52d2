use poise::serenity_prelude as serenity;

use warden_core::{Context, Error};
use warden_utils::embed::COLOR_SUCCESS;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "avatar",
    desc: "Show a user's avatar.",
    category: "general",
    usage: "/avatar [user]",
};

/// Show a user's avatar
#[poise::command(slash_command, category = "General")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "Whose avatar (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());
    let name = user.global_name.as_deref().unwrap_or(&user.name);

    let embed = serenity::CreateEmbed::new()
        .title(format!("{name}'s avatar"))
        .color(COLOR_SUCCESS)
        .image(user.face());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
