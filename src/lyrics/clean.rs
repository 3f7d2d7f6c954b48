// Lyrics cleanup — strips bracketed annotations that lyric sites embed.
//
// Scraped lyrics carry section headers like "[Chorus]" or "[Verse 2: Artist]"
// and ad-libs like "(yeah, yeah)". Left in, a header line contributes a bogus
// anchor word ("chorus") and an ad-lib hides the real line ending.

use std::sync::LazyLock;

use regex_lite::Regex;

/// `[...]` or `(...)` spans on a single line.
#[allow(clippy::expect_used)]
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]\n]*\]|\([^)\n]*\)").expect("valid regex: ANNOTATION")
});

/// Everything except ASCII letters, digits, whitespace and apostrophes.
#[allow(clippy::expect_used)]
static NON_LYRIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s']").expect("valid regex: NON_LYRIC"));

/// Remove bracketed and parenthesized annotations, leaving line structure intact.
///
/// A header alone on its line leaves a blank line behind, which then acts as
/// a stanza break during segmentation.
pub fn strip_annotations(text: &str) -> String {
    ANNOTATION.replace_all(text, "").into_owned()
}

/// Produce a normalized plain-text copy of a lyrics file: annotations removed,
/// lowercased, punctuation other than apostrophes dropped.
pub fn clean_lyrics(text: &str) -> String {
    let stripped = strip_annotations(text).to_lowercase();
    NON_LYRIC.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_annotations_removes_headers_and_adlibs() {
        let text = "[Chorus]\nI keep it movin' (yeah)\nall night long [x2]";
        assert_eq!(strip_annotations(text), "\nI keep it movin' \nall night long ");
    }

    #[test]
    fn test_strip_annotations_does_not_cross_lines() {
        let text = "open ( paren\nclose ) paren";
        assert_eq!(strip_annotations(text), text);
    }

    #[test]
    fn test_clean_lyrics() {
        let text = "[Verse 1]\nHello, World! It's 2 A.M.\n";
        assert_eq!(clean_lyrics(text), "\nhello world it's 2 am\n");
    }
}
