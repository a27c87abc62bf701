//! Bionic-reading emphasis: bold the first half of every word.

/// Wrap the first `⌊chars/2⌋` characters of each whitespace-separated word
/// in `<b>…</b>` markup, rejoining words with single spaces.
///
/// The half point counts characters, not bytes, so multi-byte words split
/// correctly. A one-character word produces an empty bold head
/// (`<b></b>x`), which downstream rendering tolerates.
pub fn emphasize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mid = word.chars().count() / 2;
        let split = word
            .char_indices()
            .nth(mid)
            .map_or(word.len(), |(idx, _)| idx);
        out.push_str("<b>");
        out.push_str(&word[..split]);
        out.push_str("</b>");
        out.push_str(&word[split..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bolds_first_half_of_each_word() {
        assert_eq!(emphasize("Hello"), "<b>He</b>llo");
        assert_eq!(emphasize("Hello world"), "<b>He</b>llo <b>wo</b>rld");
    }

    #[test]
    fn one_character_word_has_empty_bold_head() {
        assert_eq!(emphasize("a"), "<b></b>a");
    }

    #[test]
    fn empty_and_whitespace_only_input_yield_empty_output() {
        assert_eq!(emphasize(""), "");
        assert_eq!(emphasize("   \t\n "), "");
    }

    #[test]
    fn collapses_runs_of_whitespace_to_single_spaces() {
        assert_eq!(emphasize("one   two"), "<b>o</b>ne <b>t</b>wo");
    }

    #[test]
    fn splits_on_character_boundaries_not_bytes() {
        assert_eq!(emphasize("café"), "<b>ca</b>fé");
        assert_eq!(emphasize("héllo"), "<b>hé</b>llo");
    }

    #[test]
    fn punctuation_stays_attached_to_its_word() {
        assert_eq!(emphasize("wait."), "<b>wa</b>it.");
    }
}
