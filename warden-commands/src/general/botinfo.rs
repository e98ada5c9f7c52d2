use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use warden_core::{Context, Error};
use warden_utils::embed::{DEFAULT_EMBED_COLOR, titled_embed};
use warden_utils::formatting::{INVITE_PERMISSIONS, format_uptime, invite_url};

pub const BOTINFO_META: CommandMeta = CommandMeta {
    name: "botinfo",
    desc: "Show details about the bot.",
    category: "general",
    usage: "/botinfo",
};

pub const INVITE_META: CommandMeta = CommandMeta {
    name: "invite",
    desc: "Get a link to add the bot to another server.",
    category: "general",
    usage: "/invite",
};

pub const UPTIME_META: CommandMeta = CommandMeta {
    name: "uptime",
    desc: "Show how long the bot has been running.",
    category: "general",
    usage: "/uptime",
};

fn uptime_label(ctx: Context<'_>) -> String {
    format_uptime(ctx.data().started_at.elapsed().as_secs())
}

/// Show details about the bot
#[poise::command(slash_command, category = "General")]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), Error> {
    let (tag, id, face) = {
        let me = ctx.cache().current_user();
        (me.tag(), me.id, me.face())
    };
    let guild_count = ctx.cache().guild_count();

    let mut embed = serenity::CreateEmbed::new()
        .title("Bot info")
        .color(DEFAULT_EMBED_COLOR)
        .thumbnail(face)
        .field("Name", tag, true)
        .field("ID", id.get().to_string(), true)
        .field("Uptime", uptime_label(ctx), true)
        .field("Servers", guild_count.to_string(), true);

    if let Some(credits) = ctx.data().credits.as_deref() {
        embed = embed.field("Made by", credits, false);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Get a link to add the bot to another server
#[poise::command(slash_command, category = "General")]
pub async fn invite(ctx: Context<'_>) -> Result<(), Error> {
    let bot_id = ctx.cache().current_user().id;
    let url = invite_url(bot_id.get(), INVITE_PERMISSIONS);

    let embed = titled_embed("Invite the bot").description(format!("[Click here]({url})"));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show how long the bot has been running
#[poise::command(slash_command, category = "General")]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(format!("I've been running for {}.", uptime_label(ctx)))
        .await?;
    Ok(())
}
