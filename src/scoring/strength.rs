// Pairwise rhyme strength.
//
// strength(a, b) = clamp01((base + stress_bonus) * mean_confidence)
//
// `base` is 1.0 for identical rhyme keys and otherwise one minus the
// normalized token edit distance between the keys. The stress bonus rewards
// words whose stress patterns agree from the last primary stress onward
// ("NA-tion" / "PA-tience"), even when the keys differ by a phoneme. A tail
// of a single stressed syllable matches every other stress-final word, so
// only tails spanning two or more syllables earn it.
//
// Mean confidence discounts pairs whose keys came from the stem or spelling
// fallbacks. Every term is symmetric in (a, b), so the score is too.

use serde::Serialize;

use super::distance::{key_tokens, levenshtein};
use crate::phonetics::resolver::{KeySource, RhymeKey, RhymeResolver};

/// Bonus added when stress tails match.
pub const STRESS_BONUS: f64 = 0.1;
/// Shortest matching stress tail (in syllables) that earns the bonus.
/// Every stressed monosyllable ends in "1", so a one-syllable match says
/// nothing about the rhyme.
const MIN_BONUS_TAIL: usize = 2;

/// Every intermediate value behind one strength score.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthBreakdown {
    pub key_a: RhymeKey,
    pub key_b: RhymeKey,
    /// Key similarity before the bonus and confidence discount
    pub base: f64,
    pub stress_bonus: f64,
    /// Mean of the two key confidences
    pub confidence: f64,
    /// Final clamped strength
    pub strength: f64,
}

impl StrengthBreakdown {
    /// Pretty-printed JSON, as `score --json` prints it.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Scores rhyme strength between words, backed by a resolver and its cache.
pub struct RhymeScorer<'d> {
    resolver: RhymeResolver<'d>,
}

impl<'d> RhymeScorer<'d> {
    pub fn new(resolver: RhymeResolver<'d>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &RhymeResolver<'d> {
        &self.resolver
    }

    /// Rhyme strength in [0, 1].
    pub fn strength(&self, a: &str, b: &str) -> f64 {
        self.breakdown(a, b).strength
    }

    /// Strength with all of its components.
    pub fn breakdown(&self, a: &str, b: &str) -> StrengthBreakdown {
        let key_a = self.resolver.resolve(a);
        let key_b = self.resolver.resolve(b);

        if key_a.is_empty() || key_b.is_empty() {
            return StrengthBreakdown {
                key_a,
                key_b,
                base: 0.0,
                stress_bonus: 0.0,
                confidence: 0.0,
                strength: 0.0,
            };
        }

        let base = base_similarity(&key_a, &key_b);
        let stress_bonus = self.stress_bonus(a, b);
        let confidence = (key_a.confidence() + key_b.confidence()) / 2.0;
        let strength = ((base + stress_bonus) * confidence).clamp(0.0, 1.0);

        StrengthBreakdown {
            key_a,
            key_b,
            base,
            stress_bonus,
            confidence,
            strength,
        }
    }

    /// `STRESS_BONUS` when both words have dictionary stress data and their
    /// first-variant patterns match, over at least two syllables, from the
    /// last primary stress onward.
    fn stress_bonus(&self, a: &str, b: &str) -> f64 {
        let (Some(pattern_a), Some(pattern_b)) = (
            self.resolver.stress_pattern(a),
            self.resolver.stress_pattern(b),
        ) else {
            return 0.0;
        };

        match (primary_stress_tail(&pattern_a), primary_stress_tail(&pattern_b)) {
            (Some(tail_a), Some(tail_b))
                if tail_a.len() >= MIN_BONUS_TAIL && tail_a == tail_b =>
            {
                STRESS_BONUS
            }
            _ => 0.0,
        }
    }
}

/// Similarity of two non-empty keys in [0, 1].
pub fn base_similarity(key_a: &RhymeKey, key_b: &RhymeKey) -> f64 {
    if key_a.key == key_b.key {
        return 1.0;
    }

    let spelled =
        key_a.source == KeySource::Orthographic || key_b.source == KeySource::Orthographic;
    let (tokens_a, tokens_b) = key_tokens(&key_a.key, &key_b.key, spelled);
    let longest = tokens_a.len().max(tokens_b.len()).max(1);
    let distance = levenshtein(&tokens_a, &tokens_b);

    (1.0 - distance as f64 / longest as f64).max(0.0)
}

/// The stress pattern from its last primary stress (`1`) to the end.
fn primary_stress_tail(pattern: &str) -> Option<&str> {
    pattern.rfind('1').map(|idx| &pattern[idx..])
}
