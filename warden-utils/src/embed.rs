use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x58_65_F2;

pub const COLOR_SUCCESS: u32 = 0x2E_CC_71;
pub const COLOR_WARNING: u32 = 0xE6_7E_22;
pub const COLOR_DANGER: u32 = 0xE7_4C_3C;
pub const COLOR_INFO: u32 = 0x34_98_DB;
pub const COLOR_CHANNEL: u32 = 0x20_66_94;
pub const COLOR_GOLD: u32 = 0xC2_7C_0E;
pub const COLOR_POLL: u32 = 0x9B_59_B6;

/// Discord caps embeds at 25 fields.
pub const MAX_EMBED_FIELDS: usize = 25;
pub const MAX_EMBED_TITLE_CHARS: usize = 256;
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;
/// Combined limit over title, description, field names and values, and footer.
pub const MAX_EMBED_TOTAL_CHARS: usize = 6000;

/// Embed with the default color and a title.
pub fn titled_embed(title: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
}
