//! Residual content sanitization.

/// Strips every character that is not a CJK ideograph or a word character.
///
/// Word characters are Unicode alphanumerics and `_`; removed runs collapse
/// without inserting separators. An empty result means the owning line
/// carried no usable content and must be dropped.
pub fn sanitize_content(raw: &str) -> String {
    raw.chars()
        .filter(|&c| is_cjk(c) || c.is_alphanumeric() || c == '_')
        .collect()
}

/// Detects whether a character is a CJK ideograph.
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_cjk_and_alphanumerics() {
        assert_eq!(sanitize_content("开会 room2"), "开会room2");
        assert_eq!(sanitize_content("午休"), "午休");
    }

    #[test]
    fn strips_punctuation_without_separators() {
        assert_eq!(sanitize_content("例-会（周报）!"), "例会周报");
    }

    #[test]
    fn punctuation_only_content_becomes_empty() {
        assert_eq!(sanitize_content("---"), "");
        assert_eq!(sanitize_content(" ~。、 "), "");
        assert_eq!(sanitize_content(""), "");
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert_eq!(sanitize_content("a_b"), "a_b");
    }
}
