// Lexical segmentation: raw text -> stanzas -> lines -> anchor words.
//
// The anchor word of a line is its final word-like token. Stanza boundaries
// (runs of blank lines) are dropped here; the rhyme graph only ever sees the
// flattened, stanza-ordered line sequence.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Trailing word of a trimmed line: a letter followed by letters, apostrophes
/// or hyphens, anchored at the end.
#[allow(clippy::expect_used)]
static LAST_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z'-]*$").expect("valid regex: LAST_WORD")
});

/// Curly quote characters and their straight replacements.
const SMART_QUOTES: [(char, char); 6] = [
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201B}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{201F}', '"'),
];

/// Replace curly single/double quotes with their ASCII equivalents.
pub fn normalize_smart_quotes(text: &str) -> String {
    text.chars()
        .map(|c| {
            SMART_QUOTES
                .iter()
                .find(|(smart, _)| *smart == c)
                .map_or(c, |(_, straight)| *straight)
        })
        .collect()
}

/// Split text into stanzas of non-blank lines.
///
/// CRLF is treated as LF. Lines that are empty after trimming separate
/// stanzas and are never part of one. Lines keep their original whitespace.
pub fn split_stanzas(text: &str) -> Vec<Vec<String>> {
    let text = text.replace("\r\n", "\n");
    let mut stanzas = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }

    stanzas
}

/// Quote-normalize, segment, and flatten text into the ordered line list the
/// graph builder indexes positions against.
pub fn verse_lines(text: &str) -> Vec<String> {
    split_stanzas(&normalize_smart_quotes(text))
        .into_iter()
        .flatten()
        .collect()
}

/// Extract the lowercase anchor word from a line, if it has one.
pub fn find_last_word(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    LAST_WORD.find(line).map(|m| m.as_str().to_lowercase())
}
