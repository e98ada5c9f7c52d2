/// Discord's hard limit on plain message content.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// Administrator bits requested by the invite link.
pub const INVITE_PERMISSIONS: u64 = 8;

/// Break mention syntax so user text cannot ping anyone.
pub fn escape_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

/// Format seconds into a compact human-readable duration (e.g. 59s, 1m, 1h, 1d, 1h 30m).
pub fn format_compact_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        return if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        };
    }

    if hours > 0 {
        let mut parts = vec![format!("{}h", hours)];
        if minutes > 0 {
            parts.push(format!("{}m", minutes));
        }
        if seconds > 0 {
            parts.push(format!("{}s", seconds));
        }
        return parts.join(" ");
    }

    if minutes > 0 {
        return if seconds > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}m", minutes)
        };
    }

    format!("{}s", seconds)
}

/// Spell out an uptime, largest unit first, skipping empty units.
pub fn format_uptime(total_seconds: u64) -> String {
    let mut remaining = total_seconds;
    let mut parts = Vec::new();

    for (unit, divisor) in [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)] {
        if remaining < divisor {
            continue;
        }
        let value = remaining / divisor;
        remaining %= divisor;
        let plural = if value == 1 { "" } else { "s" };
        parts.push(format!("{value} {unit}{plural}"));
    }

    if parts.is_empty() {
        "0 seconds".to_owned()
    } else {
        parts.join(", ")
    }
}

/// Join items with `separator`, dropping the tail that would not fit in `limit`
/// characters and noting how many were left out.
pub fn join_within_limit<I, S>(items: I, separator: &str, limit: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    let total = items.len();
    let mut out = String::new();

    for (index, item) in items.iter().enumerate() {
        let item = item.as_ref();
        let extra = if out.is_empty() { 0 } else { separator.chars().count() };
        let omitted = total - index;
        let suffix = format!(" (+{omitted} more)");
        let projected = out.chars().count() + extra + item.chars().count();
        let needs_room_for_suffix = index + 1 < total;
        let budget = if needs_room_for_suffix {
            limit.saturating_sub(suffix.chars().count() + 1)
        } else {
            limit
        };

        if projected > budget {
            out.push_str(&suffix);
            return out.trim_start().to_owned();
        }

        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(item);
    }

    out
}

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }

    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// OAuth2 URL that adds the bot with both the `bot` and slash-command scopes.
pub fn invite_url(application_id: u64, permissions: u64) -> String {
    format!(
        "https://discord.com/oauth2/authorize?client_id={}&permissions={}&scope=bot%20applications.commands",
        application_id, permissions
    )
}

#[cfg(test)]
mod tests {
    use super::{
        escape_mentions, format_compact_duration, format_uptime, invite_url, join_within_limit,
        truncate_chars,
    };

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 4), "abc…");
        assert_eq!(truncate_chars(&"é".repeat(20), 10).chars().count(), 10);
        assert_eq!(truncate_chars("abc", 0), "…");
    }

    #[test]
    fn compact_duration_formatting() {
        assert_eq!(format_compact_duration(59), "59s");
        assert_eq!(format_compact_duration(60), "1m");
        assert_eq!(format_compact_duration(61), "1m 1s");
        assert_eq!(format_compact_duration(600), "10m");
        assert_eq!(format_compact_duration(3660), "1h 1m");
        assert_eq!(format_compact_duration(86400), "1d");
        assert_eq!(format_compact_duration(90000), "1d 1h");
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0 seconds");
        assert_eq!(format_uptime(1), "1 second");
        assert_eq!(format_uptime(61), "1 minute, 1 second");
        assert_eq!(format_uptime(3600), "1 hour");
        assert_eq!(format_uptime(2 * 86_400 + 3 * 3600 + 5), "2 days, 3 hours, 5 seconds");
    }

    #[test]
    fn mentions_are_neutralised() {
        assert_eq!(escape_mentions("@everyone hi"), "@\u{200B}everyone hi");
        assert_eq!(escape_mentions("plain"), "plain");
    }

    #[test]
    fn joins_everything_that_fits() {
        assert_eq!(join_within_limit(["a", "b", "c"], " ", 100), "a b c");
        assert_eq!(join_within_limit(Vec::<&str>::new(), " ", 100), "");
    }

    #[test]
    fn truncates_and_counts_the_rest() {
        let items: Vec<String> = (0..100).map(|index| format!("item{index:03}")).collect();
        let joined = join_within_limit(&items, " ", 40);

        assert!(joined.chars().count() <= 40, "{joined}");
        assert!(joined.starts_with("item000 item001"));
        assert!(joined.ends_with("more)"));
    }

    #[test]
    fn invite_url_contains_application_and_scopes() {
        let url = invite_url(1234, 8);
        assert!(url.contains("client_id=1234"));
        assert!(url.contains("permissions=8"));
        assert!(url.ends_with("scope=bot%20applications.commands"));
    }
}
