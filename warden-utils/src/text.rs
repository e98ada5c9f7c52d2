/// Reverse text by Unicode scalar value.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Alternate case: even positions lower, odd positions upper.
pub fn mock_text(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(index, ch)| {
            let converted: Vec<char> = if index % 2 == 1 {
                ch.to_uppercase().collect()
            } else {
                ch.to_lowercase().collect()
            };
            converted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{mock_text, reverse_text};

    #[test]
    fn reverses_characters() {
        assert_eq!(reverse_text("hello"), "olleh");
        assert_eq!(reverse_text("árvíz"), "zívrá");
        assert_eq!(reverse_text(""), "");
    }

    #[test]
    fn mocks_alternating_case() {
        assert_eq!(mock_text("hello world"), "hElLo wOrLd");
        assert_eq!(mock_text("ABC"), "aBc");
    }
}
