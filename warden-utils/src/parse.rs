/// How an `unban` target was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserIdentifier {
    Id(u64),
    Tag { name: String, discriminator: String },
}

/// Parse a numeric user id or a `name#discriminator` tag.
pub fn parse_user_identifier(raw: &str) -> Option<UserIdentifier> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if value.bytes().all(|byte| byte.is_ascii_digit()) {
        return value.parse::<u64>().ok().filter(|id| *id > 0).map(UserIdentifier::Id);
    }

    let (name, discriminator) = value.rsplit_once('#')?;
    if name.is_empty()
        || discriminator.is_empty()
        || discriminator.len() > 4
        || !discriminator.bytes().all(|byte| byte.is_ascii_digit())
    {
        return None;
    }

    Some(UserIdentifier::Tag {
        name: name.to_owned(),
        discriminator: discriminator.to_owned(),
    })
}

/// Whether a user matches a parsed tag. Accounts without a legacy
/// discriminator match `#0`.
pub fn tag_matches(
    user_name: &str,
    user_discriminator: Option<u16>,
    name: &str,
    discriminator: &str,
) -> bool {
    let Ok(wanted) = discriminator.parse::<u16>() else {
        return false;
    };

    user_name == name && user_discriminator.unwrap_or(0) == wanted
}

/// Parse a Discord snowflake (message, channel or user id).
pub fn parse_snowflake(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Split whitespace-separated options, dropping empty tokens.
pub fn split_options(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::{UserIdentifier, parse_snowflake, parse_user_identifier, split_options, tag_matches};

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(
            parse_user_identifier(" 123456789012345678 "),
            Some(UserIdentifier::Id(123456789012345678))
        );
        assert_eq!(parse_user_identifier("0"), None);
    }

    #[test]
    fn parses_tags() {
        assert_eq!(
            parse_user_identifier("spammer#1234"),
            Some(UserIdentifier::Tag {
                name: "spammer".to_owned(),
                discriminator: "1234".to_owned(),
            })
        );
        assert_eq!(
            parse_user_identifier("we#ird#0"),
            Some(UserIdentifier::Tag {
                name: "we#ird".to_owned(),
                discriminator: "0".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!(parse_user_identifier(""), None);
        assert_eq!(parse_user_identifier("justaname"), None);
        assert_eq!(parse_user_identifier("#1234"), None);
        assert_eq!(parse_user_identifier("name#"), None);
        assert_eq!(parse_user_identifier("name#12345"), None);
        assert_eq!(parse_user_identifier("name#abcd"), None);
    }

    #[test]
    fn tag_matching() {
        assert!(tag_matches("spammer", Some(1234), "spammer", "1234"));
        assert!(tag_matches("spammer", Some(7), "spammer", "0007"));
        assert!(tag_matches("newstyle", None, "newstyle", "0"));
        assert!(!tag_matches("spammer", Some(1234), "Spammer", "1234"));
        assert!(!tag_matches("spammer", Some(1234), "spammer", "4321"));
    }

    #[test]
    fn snowflakes() {
        assert_eq!(parse_snowflake("1187370485417451530"), Some(1187370485417451530));
        assert_eq!(parse_snowflake("abc"), None);
        assert_eq!(parse_snowflake("-5"), None);
        assert_eq!(parse_snowflake("0"), None);
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(split_options("  a b\tc\n d "), vec!["a", "b", "c", "d"]);
        assert!(split_options("   ").is_empty());
    }
}
