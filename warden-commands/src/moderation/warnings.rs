use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::require_guild;
use crate::moderation::gate::moderator_check;
use warden_core::{Context, Error};
use warden_ledger::WarningRecord;
use warden_utils::embed::{
    COLOR_WARNING, MAX_EMBED_FIELDS, MAX_EMBED_TITLE_CHARS, MAX_EMBED_TOTAL_CHARS,
    MAX_FIELD_VALUE_CHARS,
};
use warden_utils::formatting::{escape_mentions, truncate_chars};
use warden_utils::time::discord_timestamp;

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "List the warnings recorded for a member.",
    category: "moderation",
    usage: "/warnings <member>",
};

/// Room kept for the "Showing N of M" footer.
const FOOTER_RESERVE_CHARS: usize = 64;

/// Characters left for fields once the title and footer are accounted for.
pub fn field_budget(title: &str) -> usize {
    MAX_EMBED_TOTAL_CHARS
        .saturating_sub(title.chars().count())
        .saturating_sub(FOOTER_RESERVE_CHARS)
}

/// One `(name, value)` embed field per warning, numbered from 1.
///
/// Long reasons are cut so each value fits a field, and fields stop once
/// the next one would overrun `budget` characters or the field cap.
pub fn warning_fields(records: &[WarningRecord], budget: usize) -> Vec<(String, String)> {
    let mut used = 0;
    let mut fields = Vec::new();

    for (index, record) in records.iter().take(MAX_EMBED_FIELDS).enumerate() {
        let name = format!("#{}", index + 1);
        let signature = format!(
            "\nBy <@{}> {}",
            record.moderator_id,
            discord_timestamp(record.issued_at as i64, 'f')
        );
        let reason = truncate_chars(
            &escape_mentions(&record.reason),
            MAX_FIELD_VALUE_CHARS.saturating_sub(signature.chars().count()),
        );
        let value = format!("{reason}{signature}");

        let size = name.chars().count() + value.chars().count();
        if used + size > budget {
            break;
        }
        used += size;
        fields.push((name, value));
    }

    fields
}

/// List the warnings recorded for a member
#[poise::command(slash_command, category = "Moderation", check = "moderator_check")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The member to look up"] member: serenity::Member,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx)?;
    let records = ctx
        .data()
        .ledger
        .list_warnings(guild_id.get(), member.user.id.get());

    if records.is_empty() {
        ctx.send(
            poise::CreateReply::default()
                .content("No warnings recorded for that member.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let title = truncate_chars(
        &format!("Warnings for {}", member.user.tag()),
        MAX_EMBED_TITLE_CHARS,
    );
    let fields = warning_fields(&records, field_budget(&title));
    let shown = fields.len();

    let mut embed = fields.into_iter().fold(
        serenity::CreateEmbed::new().title(title).color(COLOR_WARNING),
        |embed, (name, value)| embed.field(name, value, false),
    );

    if shown < records.len() {
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Showing {} of {} warnings",
            shown,
            records.len()
        )));
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
