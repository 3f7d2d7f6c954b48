// CMU Pronouncing Dictionary loader.
//
// Parses the plain-text distribution format, either the classic uppercase
// file ("CAT  K AE1 T", ";;;" comments) or the newer cmudict.dict layout
// ("cat K AE1 T", "#" comments). Alternate pronunciations are listed as
// "WORD(2)", "WORD(3)", ... and are kept in file order, so the first variant
// is always the dictionary's preferred one.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::traits::PhoneticDictionary;

/// In-memory pronunciation table keyed by lowercase word.
#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDict {
    /// A dictionary with no entries. Every lookup misses, so every word
    /// resolves through the orthographic fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and parse a dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pronunciation dictionary {}", path.display()))?;
        let dict = Self::parse(&text);
        info!(
            words = dict.len(),
            path = %path.display(),
            "Loaded pronunciation dictionary"
        );
        Ok(dict)
    }

    /// Parse dictionary text. Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        let mut skipped = 0usize;

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(";;;") || line.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Some((word, phones)) => entries.entry(word).or_default().push(phones),
                None => {
                    skipped += 1;
                    debug!(line = line_no + 1, content = raw, "Skipping malformed dictionary line");
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "Dictionary lines skipped");
        }

        Self { entries }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dictionary words that rhyme perfectly with `word`: they share the
    /// rhyming part of at least one of its pronunciations. Sorted, without
    /// `word` itself.
    pub fn rhymes(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let targets: BTreeSet<String> = self
            .phones_for_word(&word)
            .iter()
            .filter_map(|phones| self.rhyming_part(phones))
            .collect();
        if targets.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<String> = self
            .entries
            .iter()
            .filter(|(candidate, _)| **candidate != word)
            .filter(|(_, variants)| {
                variants
                    .iter()
                    .filter_map(|phones| self.rhyming_part(phones))
                    .any(|part| targets.contains(&part))
            })
            .map(|(candidate, _)| candidate.clone())
            .collect();
        found.sort();
        found
    }
}

impl PhoneticDictionary for CmuDict {
    fn phones_for_word(&self, word: &str) -> Vec<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// Split one entry line into (lowercase word, normalized phoneme string).
fn parse_line(line: &str) -> Option<(String, String)> {
    // Trailing "# comment" annotations appear in cmudict.dict
    let line = line.split_once(" #").map_or(line, |(entry, _)| entry);

    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let phones: Vec<&str> = parts.collect();
    if phones.is_empty() || !phones.iter().all(|p| is_phoneme(p)) {
        return None;
    }

    let word = strip_variant_suffix(head).to_lowercase();
    if word.is_empty() {
        return None;
    }
    Some((word, phones.join(" ")))
}

/// "WORD(2)" -> "WORD".
fn strip_variant_suffix(head: &str) -> &str {
    match head.strip_suffix(')').and_then(|h| h.rsplit_once('(')) {
        Some((word, n)) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => word,
        _ => head,
    }
}

/// ARPAbet symbol: uppercase letters with an optional trailing stress digit.
fn is_phoneme(token: &str) -> bool {
    let letters = token.trim_end_matches(['0', '1', '2']);
    !letters.is_empty()
        && letters.len() + 1 >= token.len()
        && letters.chars().all(|c| c.is_ascii_uppercase())
}
