use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current unix timestamp in seconds.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

/// Discord timestamp markup, rendered in each viewer's locale.
pub fn discord_timestamp(unix_secs: i64, style: char) -> String {
    format!("<t:{}:{}>", unix_secs, style)
}

#[cfg(test)]
mod tests {
    use super::discord_timestamp;

    #[test]
    fn renders_timestamp_markup() {
        assert_eq!(discord_timestamp(1_700_000_000, 'f'), "<t:1700000000:f>");
        assert_eq!(discord_timestamp(0, 'R'), "<t:0:R>");
    }
}
