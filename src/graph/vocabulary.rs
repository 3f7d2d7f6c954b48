// Vocabulary aggregation: anchor words with frequencies and line positions.

use std::collections::BTreeMap;

use crate::lyrics::segment::find_last_word;

/// One distinct anchor word.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub word: String,
    /// Occurrences across all lines
    pub count: usize,
    /// Zero-based line indexes, ascending
    pub positions: Vec<usize>,
}

/// Distinct anchor words meeting the frequency floor, sorted by word.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Aggregate the anchor words of `lines`. Words that occur fewer than
    /// `min_freq` times are dropped after counting.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], min_freq: usize) -> Self {
        let mut by_word: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(word) = find_last_word(line.as_ref()) {
                by_word.entry(word).or_default().push(idx);
            }
        }

        let entries = by_word
            .into_iter()
            .filter(|(_, positions)| positions.len() >= min_freq)
            .map(|(word, positions)| VocabularyEntry {
                word,
                count: positions.len(),
                positions,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether any position in `a` lies within `window` lines of any position in
/// `b`. Both slices must be sorted ascending.
pub fn within_window(a: &[usize], b: &[usize], window: usize) -> bool {
    // Merge walk: the closest pair is always adjacent in merged order
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].abs_diff(b[j]) <= window {
            return true;
        }
        if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_counts_and_positions() {
        let lines = ["the cat sat", "on the mat", "where?", "I sat", "by the cat"];
        let vocab = Vocabulary::from_lines(&lines, 1);
        let words: Vec<&str> = vocab.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "mat", "sat"]);
        let sat = &vocab.entries()[2];
        assert_eq!(sat.count, 2);
        assert_eq!(sat.positions, vec![0, 3]);
    }

    #[test]
    fn test_min_freq_filters_after_counting() {
        let lines = ["a cat", "a hat", "a cat"];
        let vocab = Vocabulary::from_lines(&lines, 2);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.entries()[0].word, "cat");
        assert_eq!(vocab.entries()[0].positions, vec![0, 2]);
    }

    #[test]
    fn test_case_folded() {
        let lines = ["The CAT", "the cat"];
        let vocab = Vocabulary::from_lines(&lines, 1);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.entries()[0].count, 2);
    }

    #[test]
    fn test_within_window() {
        assert!(within_window(&[0, 10], &[12], 2));
        assert!(!within_window(&[0, 10], &[13], 2));
        assert!(within_window(&[5], &[5], 0));
        assert!(within_window(&[20], &[1, 3, 19], 1));
        assert!(!within_window(&[], &[1], 100));
    }
}
