use std::future::Future;

use tracing::{error, info, warn};

use poise::serenity_prelude as serenity;

use warden_core::Context;

/// Channel names recognised as an existing moderation log, in priority order.
pub const AUDIT_CHANNEL_NAMES: [&str; 3] = ["mod-log", "mod_log", "modlog"];

const AUDIT_CHANNEL_NAME: &str = "mod-log";
const AUDIT_CHANNEL_REASON: &str = "Automatic moderation log channel";

/// One moderation event, rendered as an embed in the audit channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditRecord {
    pub title: String,
    pub color: u32,
    pub fields: Vec<(String, String)>,
}

impl AuditRecord {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    fn into_embed(self) -> serenity::CreateEmbed {
        self.fields.into_iter().fold(
            serenity::CreateEmbed::new()
                .title(self.title)
                .color(self.color)
                .timestamp(serenity::Timestamp::now()),
            |embed, (name, value)| embed.field(name, value, false),
        )
    }
}

/// Guild channel operations the audit sink needs.
pub trait AuditChannels {
    /// Text channels as (id, name), in the order the guild displays them.
    fn text_channels(
        &self,
    ) -> impl Future<Output = Result<Vec<(serenity::ChannelId, String)>, serenity::Error>> + Send;

    /// Create the read-only audit channel.
    fn create_audit_channel(
        &self,
    ) -> impl Future<Output = Result<serenity::ChannelId, serenity::Error>> + Send;
}

/// Channel kinds that can receive audit records: text and announcement.
pub fn is_audit_channel_kind(kind: serenity::ChannelType) -> bool {
    matches!(kind, serenity::ChannelType::Text | serenity::ChannelType::News)
}

pub struct GuildAuditChannels<'a> {
    http: &'a serenity::Http,
    guild_id: serenity::GuildId,
}

impl<'a> GuildAuditChannels<'a> {
    pub fn new(http: &'a serenity::Http, guild_id: serenity::GuildId) -> Self {
        Self { http, guild_id }
    }
}

impl AuditChannels for GuildAuditChannels<'_> {
    async fn text_channels(&self) -> Result<Vec<(serenity::ChannelId, String)>, serenity::Error> {
        let channels = self.guild_id.channels(self.http).await?;

        let mut text_channels: Vec<serenity::GuildChannel> = channels
            .into_values()
            .filter(|channel| is_audit_channel_kind(channel.kind))
            .collect();
        text_channels.sort_by_key(|channel| (channel.position, channel.id));

        Ok(text_channels
            .into_iter()
            .map(|channel| (channel.id, channel.name))
            .collect())
    }

    async fn create_audit_channel(&self) -> Result<serenity::ChannelId, serenity::Error> {
        let everyone = serenity::RoleId::new(self.guild_id.get());
        let builder = serenity::CreateChannel::new(AUDIT_CHANNEL_NAME)
            .kind(serenity::ChannelType::Text)
            .permissions(vec![serenity::PermissionOverwrite {
                allow: serenity::Permissions::VIEW_CHANNEL,
                deny: serenity::Permissions::SEND_MESSAGES,
                kind: serenity::PermissionOverwriteType::Role(everyone),
            }])
            .audit_log_reason(AUDIT_CHANNEL_REASON);

        let channel = self.guild_id.create_channel(self.http, builder).await?;
        info!(
            guild_id = self.guild_id.get(),
            channel_id = channel.id.get(),
            "created moderation log channel"
        );
        Ok(channel.id)
    }
}

/// First channel whose name exactly matches one of [`AUDIT_CHANNEL_NAMES`].
pub fn find_audit_channel(channels: &[(serenity::ChannelId, String)]) -> Option<serenity::ChannelId> {
    channels
        .iter()
        .find(|(_, name)| AUDIT_CHANNEL_NAMES.contains(&name.as_str()))
        .map(|(id, _)| *id)
}

/// Find the guild's audit channel, creating it when none exists.
///
/// Returns `None` on any failure; callers skip the audit write in that case.
pub async fn get_or_create_audit_channel<C>(channels: &C) -> Option<serenity::ChannelId>
where
    C: AuditChannels + Sync,
{
    let existing = match channels.text_channels().await {
        Ok(existing) => existing,
        Err(source) => {
            warn!(?source, "failed to list channels while resolving audit channel");
            return None;
        }
    };

    if let Some(channel_id) = find_audit_channel(&existing) {
        return Some(channel_id);
    }

    match channels.create_audit_channel().await {
        Ok(channel_id) => Some(channel_id),
        Err(source) => {
            warn!(?source, "failed to create audit channel");
            None
        }
    }
}

pub async fn publish_audit_record(
    http: &serenity::Http,
    channel_id: serenity::ChannelId,
    record: AuditRecord,
) -> Result<(), serenity::Error> {
    channel_id
        .send_message(http, serenity::CreateMessage::new().embed(record.into_embed()))
        .await?;
    Ok(())
}

/// Best-effort audit write. Runs after the action and the invoker reply;
/// nothing here can fail the command.
pub async fn audit(ctx: Context<'_>, guild_id: serenity::GuildId, record: AuditRecord) {
    let channels = GuildAuditChannels::new(ctx.http(), guild_id);
    let Some(channel_id) = get_or_create_audit_channel(&channels).await else {
        return;
    };

    if let Err(source) = publish_audit_record(ctx.http(), channel_id, record).await {
        error!(
            ?source,
            guild_id = guild_id.get(),
            channel_id = channel_id.get(),
            "failed to publish audit record"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use poise::serenity_prelude as serenity;

    use super::{
        AuditChannels, AuditRecord, find_audit_channel, get_or_create_audit_channel,
        is_audit_channel_kind,
    };

    const CREATED_ID: u64 = 999;

    #[derive(Default)]
    struct FakeChannels {
        channels: Vec<(serenity::ChannelId, String)>,
        fail_listing: bool,
        fail_creation: bool,
        listings: AtomicUsize,
        creations: AtomicUsize,
    }

    impl FakeChannels {
        fn with(names: &[&str]) -> Self {
            Self {
                channels: names
                    .iter()
                    .enumerate()
                    .map(|(index, name)| (serenity::ChannelId::new(index as u64 + 1), (*name).to_owned()))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl AuditChannels for FakeChannels {
        async fn text_channels(
            &self,
        ) -> Result<Vec<(serenity::ChannelId, String)>, serenity::Error> {
            self.listings.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                return Err(serenity::Error::Other("listing failed"));
            }
            Ok(self.channels.clone())
        }

        async fn create_audit_channel(&self) -> Result<serenity::ChannelId, serenity::Error> {
            self.creations.fetch_add(1, Ordering::SeqCst);
            if self.fail_creation {
                return Err(serenity::Error::Other("missing access"));
            }
            Ok(serenity::ChannelId::new(CREATED_ID))
        }
    }

    #[tokio::test]
    async fn existing_mod_log_is_reused_without_creating() {
        let channels = FakeChannels::with(&["general", "mod-log", "memes"]);

        let resolved = get_or_create_audit_channel(&channels).await;

        assert_eq!(resolved, Some(serenity::ChannelId::new(2)));
        assert_eq!(channels.creations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn alternative_names_are_recognised() {
        for name in ["mod_log", "modlog"] {
            let channels = FakeChannels::with(&["general", name]);
            assert_eq!(
                get_or_create_audit_channel(&channels).await,
                Some(serenity::ChannelId::new(2))
            );
            assert_eq!(channels.creations.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn creates_exactly_once_when_missing() {
        let channels = FakeChannels::with(&["general", "Mod-Log", "mod-logs"]);

        let resolved = get_or_create_audit_channel(&channels).await;

        assert_eq!(resolved, Some(serenity::ChannelId::new(CREATED_ID)));
        assert_eq!(channels.listings.load(Ordering::SeqCst), 1);
        assert_eq!(channels.creations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn creation_failure_is_absent_not_an_error() {
        let channels = FakeChannels {
            fail_creation: true,
            ..FakeChannels::with(&["general"])
        };

        assert_eq!(get_or_create_audit_channel(&channels).await, None);
        assert_eq!(channels.creations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn listing_failure_skips_creation() {
        let channels = FakeChannels {
            fail_listing: true,
            ..Default::default()
        };

        assert_eq!(get_or_create_audit_channel(&channels).await, None);
        assert_eq!(channels.creations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn first_match_in_display_order_wins() {
        let channels = vec![
            (serenity::ChannelId::new(5), "modlog".to_owned()),
            (serenity::ChannelId::new(3), "mod-log".to_owned()),
        ];
        assert_eq!(find_audit_channel(&channels), Some(serenity::ChannelId::new(5)));
    }

    #[test]
    fn record_fields_keep_insertion_order() {
        let record = AuditRecord::new("Member kicked", 0xFF_00_00)
            .field("Member", "spammer (1)")
            .field("Reason", "spam");

        assert_eq!(record.title, "Member kicked");
        assert_eq!(
            record.fields,
            vec![
                ("Member".to_owned(), "spammer (1)".to_owned()),
                ("Reason".to_owned(), "spam".to_owned()),
            ]
        );
    }

    #[test]
    fn announcement_channels_count_as_audit_candidates() {
        assert!(is_audit_channel_kind(serenity::ChannelType::Text));
        assert!(is_audit_channel_kind(serenity::ChannelType::News));
        assert!(!is_audit_channel_kind(serenity::ChannelType::Voice));
        assert!(!is_audit_channel_kind(serenity::ChannelType::Category));
    }
}
