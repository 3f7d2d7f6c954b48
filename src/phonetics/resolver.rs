// Rhyme key resolution with confidence tiers.
//
// A word's rhyme key is the rhyming part of its pronunciation. When the
// dictionary doesn't know the word we try a crude stem (plural/possessive
// stripped), and when that fails too we fall back to spelling: the tail of
// the word from its last vowel letter. Each tier carries less confidence,
// and the scorer uses that confidence to discount pairs built on weak keys.

use serde::Serialize;

use super::cache::PhoneticCache;
use super::traits::PhoneticDictionary;

/// Confidence for a key read straight from the dictionary.
pub const DICTIONARY_CONFIDENCE: f64 = 1.0;
/// Confidence for a key read from the dictionary entry of the stemmed word.
pub const STEMMED_CONFIDENCE: f64 = 0.8;
/// Confidence for a spelling-based key.
pub const ORTHOGRAPHIC_CONFIDENCE: f64 = 0.3;

/// Which resolution tier produced a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySource {
    Dictionary,
    Stemmed,
    Orthographic,
}

impl KeySource {
    pub fn confidence(self) -> f64 {
        match self {
            KeySource::Dictionary => DICTIONARY_CONFIDENCE,
            KeySource::Stemmed => STEMMED_CONFIDENCE,
            KeySource::Orthographic => ORTHOGRAPHIC_CONFIDENCE,
        }
    }
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            KeySource::Dictionary => "dictionary",
            KeySource::Stemmed => "stemmed",
            KeySource::Orthographic => "orthographic",
        };
        f.write_str(label)
    }
}

/// A resolved rhyme key. Phonetic keys are space-separated phonemes
/// (`"AE1 T"`); orthographic keys are plain letter substrings (`"ox"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhymeKey {
    pub key: String,
    pub source: KeySource,
}

impl RhymeKey {
    pub fn confidence(&self) -> f64 {
        self.source.confidence()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Resolves words to rhyme keys against a dictionary, memoizing per word.
///
/// Build one per graph run; the cache goes away with it.
pub struct RhymeResolver<'d> {
    dict: &'d dyn PhoneticDictionary,
    cache: PhoneticCache,
}

impl<'d> RhymeResolver<'d> {
    pub fn new(dict: &'d dyn PhoneticDictionary) -> Self {
        Self {
            dict,
            cache: PhoneticCache::new(),
        }
    }

    pub fn dictionary(&self) -> &'d dyn PhoneticDictionary {
        self.dict
    }

    /// Number of distinct words resolved so far.
    pub fn cached_words(&self) -> usize {
        self.cache.keys.len()
    }

    /// Rhyme key and confidence tier for a word.
    pub fn resolve(&self, word: &str) -> RhymeKey {
        self.cache
            .keys
            .get_or_insert_with(word, || resolve_uncached(self.dict, word))
    }

    /// Stress pattern of the word's first pronunciation variant, if known.
    pub fn stress_pattern(&self, word: &str) -> Option<String> {
        self.cache.stresses.get_or_insert_with(word, || {
            self.dict.stresses_for_word(word).into_iter().next()
        })
    }
}

fn resolve_uncached(dict: &dyn PhoneticDictionary, word: &str) -> RhymeKey {
    if let Some(key) = dictionary_key(dict, word) {
        return RhymeKey {
            key,
            source: KeySource::Dictionary,
        };
    }

    let stem = basic_stem(word);
    if stem != word {
        if let Some(key) = dictionary_key(dict, stem) {
            return RhymeKey {
                key,
                source: KeySource::Stemmed,
            };
        }
    }

    RhymeKey {
        key: orthographic_key(stem),
        source: KeySource::Orthographic,
    }
}

/// Rhyming part of the first listed pronunciation. Only the first variant is
/// consulted; a blank or unparseable one counts as a miss.
fn dictionary_key(dict: &dyn PhoneticDictionary, word: &str) -> Option<String> {
    let phones = dict.phones_for_word(word).into_iter().next()?;
    dict.rhyming_part(&phones).filter(|key| !key.is_empty())
}

/// Strip one inflectional ending: possessive `'s`, then `es`, then `s`.
///
/// The `es` rule needs a word longer than three characters and the `s` rule
/// one longer than two: "as" is left alone and "yes" only loses its `s`.
pub fn basic_stem(word: &str) -> &str {
    if let Some(stem) = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
    {
        return stem;
    }
    let len = word.chars().count();
    if len > 3 {
        if let Some(stem) = word.strip_suffix("es") {
            return stem;
        }
    }
    if len > 2 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem;
        }
    }
    word
}

/// Spelling-based key: the word from its last vowel letter (`y` included) to
/// the end. Without a vowel, the last three characters, or the whole word
/// when it is shorter than that.
pub fn orthographic_key(word: &str) -> String {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    match chars.iter().rposition(|c| "aeiouy".contains(*c)) {
        Some(idx) => chars[idx..].iter().collect(),
        None => chars[chars.len().saturating_sub(3)..].iter().collect(),
    }
}
