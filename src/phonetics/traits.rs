// Phonetic dictionary trait — swap-ready abstraction over pronunciation data.
//
// The rhyme resolver only needs three things from a pronunciation source:
// the variants for a word, the rhyming part of a variant, and the stress
// pattern of each variant. The default extractors assume ARPAbet phonemes
// with trailing stress digits (CMU dictionary conventions); sources with a
// different phone set can override them.

/// A pronunciation source. Lookups are pure: a miss is an empty result, never
/// an error.
pub trait PhoneticDictionary: Send + Sync {
    /// Pronunciation variants for a word, in preference order. Each variant is
    /// a space-separated phoneme string such as `"K AE1 T"`.
    fn phones_for_word(&self, word: &str) -> Vec<String>;

    /// The portion of a pronunciation from its last stressed vowel onward.
    fn rhyming_part(&self, phones: &str) -> Option<String> {
        rhyming_part(phones)
    }

    /// One stress-digit string per pronunciation variant (e.g. `"10"` for
    /// "happy"). Empty when the word is unknown.
    fn stresses_for_word(&self, word: &str) -> Vec<String> {
        self.phones_for_word(word)
            .iter()
            .map(|phones| stress_pattern(phones))
            .collect()
    }
}

/// Rhyming part of an ARPAbet phoneme string.
///
/// Scans backwards for the last vowel carrying primary (`1`) or secondary
/// (`2`) stress and returns everything from it. The scan stops before the
/// first phoneme, so a word stressed only on its first phoneme (or not at
/// all) rhymes on its whole pronunciation. `None` for a blank input.
pub fn rhyming_part(phones: &str) -> Option<String> {
    let tokens: Vec<&str> = phones.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    for i in (1..tokens.len()).rev() {
        if tokens[i].ends_with(['1', '2']) {
            return Some(tokens[i..].join(" "));
        }
    }
    Some(tokens.join(" "))
}

/// Stress digits of a phoneme string, in order (`"HH AE1 P IY0"` -> `"10"`).
pub fn stress_pattern(phones: &str) -> String {
    phones.chars().filter(|c| matches!(c, '0' | '1' | '2')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rhyming_part_from_last_stressed_vowel() {
        assert_eq!(rhyming_part("K AE1 T").as_deref(), Some("AE1 T"));
        assert_eq!(rhyming_part("HH AE1 P IY0").as_deref(), Some("AE1 P IY0"));
        assert_eq!(
            rhyming_part("IH0 N T ER2 N AE1 SH AH0 N AH0 L").as_deref(),
            Some("AE1 SH AH0 N AH0 L")
        );
    }

    #[test]
    fn test_rhyming_part_secondary_stress_counts() {
        assert_eq!(rhyming_part("R EY1 N B OW2").as_deref(), Some("OW2"));
    }

    #[test]
    fn test_rhyming_part_first_phoneme_stress_returns_whole() {
        assert_eq!(rhyming_part("AE1 T").as_deref(), Some("AE1 T"));
        assert_eq!(rhyming_part("AH0").as_deref(), Some("AH0"));
    }

    #[test]
    fn test_rhyming_part_blank() {
        assert_eq!(rhyming_part(""), None);
        assert_eq!(rhyming_part("   "), None);
    }

    #[test]
    fn test_stress_pattern() {
        assert_eq!(stress_pattern("HH AE1 P IY0"), "10");
        assert_eq!(stress_pattern("IH0 N T ER2 N AE1 SH AH0 N AH0 L"), "020100");
        assert_eq!(stress_pattern("SH"), "");
    }
}
