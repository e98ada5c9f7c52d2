use crate::CommandMeta;

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| display_category(category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Unknown category: {}\nValid categories: {}",
        display_category(wanted_category),
        valid
    )
}

/// Commands grouped under bold category headings, one `name: desc` line each.
/// Expects `commands` already sorted by category.
pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("`/{}`: {}\n", command.name, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_category, grouped_help_description, unknown_category_message};
    use crate::CommandMeta;

    const PING: CommandMeta = CommandMeta {
        name: "ping",
        desc: "Show gateway latency.",
        category: "general",
        usage: "/ping",
    };
    const KICK: CommandMeta = CommandMeta {
        name: "kick",
        desc: "Kick a member.",
        category: "moderation",
        usage: "/kick <member>",
    };

    #[test]
    fn groups_under_headings() {
        let description = grouped_help_description(&[&PING, &KICK]);

        assert_eq!(
            description,
            "**General**\n`/ping`: Show gateway latency.\n\n**Moderation**\n`/kick`: Kick a member."
        );
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(grouped_help_description(&[]), "No commands available.");
    }

    #[test]
    fn unknown_category_lists_valid_ones() {
        assert_eq!(
            unknown_category_message("music", &["fun", "general"]),
            "Unknown category: Music\nValid categories: Fun, General"
        );
        assert_eq!(display_category(""), "");
    }
}
