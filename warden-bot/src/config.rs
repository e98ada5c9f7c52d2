use std::env;
use std::fmt;

use anyhow::{Context as _, bail};
use poise::serenity_prelude as serenity;

pub const DEFAULT_ACTIVITY: &str = "Grand Theft Auto VI";

/// Process settings read from the environment (and `.env`, when present).
pub struct Config {
    pub token: String,
    /// Register commands in this guild only instead of globally.
    pub guild_id: Option<serenity::GuildId>,
    pub activity: String,
    pub credits: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("activity", &self.activity)
            .field("credits", &self.credits)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let Some(token) = value("DISCORD_TOKEN") else {
            bail!("DISCORD_TOKEN is not set");
        };

        let guild_id = match value("DISCORD_GUILD_ID") {
            Some(raw) => {
                let id = raw
                    .parse::<u64>()
                    .with_context(|| format!("DISCORD_GUILD_ID is not a valid id: {raw}"))?;
                if id == 0 {
                    bail!("DISCORD_GUILD_ID must not be 0");
                }
                Some(serenity::GuildId::new(id))
            }
            None => None,
        };

        Ok(Self {
            token,
            guild_id,
            activity: value("BOT_ACTIVITY").unwrap_or_else(|| DEFAULT_ACTIVITY.to_owned()),
            credits: value("BOT_CREDITS"),
        })
    }
}
