// Token-level edit distance between rhyme keys.

/// Classic Levenshtein distance over token slices: unit cost for insertion,
/// deletion and substitution.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Single rolling row; prev[j] holds the distance between a[..i-1] and b[..j]
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ta) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tb) in b.iter().enumerate() {
            let cost = usize::from(ta != tb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split two keys into comparable token sequences.
///
/// Phonetic keys are whitespace-separated phonemes and compare phoneme by
/// phoneme. Spelling-based keys ("ight", "er") have no phoneme structure, so
/// when either side is `spelled` both keys are compared character by
/// character. The same character fallback applies if either key yields no
/// whitespace tokens at all.
pub fn key_tokens(key_a: &str, key_b: &str, spelled: bool) -> (Vec<String>, Vec<String>) {
    let tokens_a: Vec<String> = key_a.split_whitespace().map(str::to_string).collect();
    let tokens_b: Vec<String> = key_b.split_whitespace().map(str::to_string).collect();
    if spelled || tokens_a.is_empty() || tokens_b.is_empty() {
        return (chars_of(key_a), chars_of(key_b));
    }
    (tokens_a, tokens_b)
}

fn chars_of(key: &str) -> Vec<String> {
    key.chars().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein(&["AE1", "T"], &["AE1", "T"]), 0);
        assert_eq!(levenshtein(&["AE1", "T"], &["AE1", "N"]), 1);
        assert_eq!(levenshtein(&["AE1", "T"], &["AE1", "T", "S"]), 1);
        assert_eq!(levenshtein::<&str>(&[], &["A", "B"]), 2);
    }

    #[test]
    fn test_levenshtein_chars() {
        let k: Vec<char> = "kitten".chars().collect();
        let s: Vec<char> = "sitting".chars().collect();
        assert_eq!(levenshtein(&k, &s), 3);
        assert_eq!(levenshtein(&s, &k), 3);
    }

    #[test]
    fn test_key_tokens_phonemes() {
        let (a, b) = key_tokens("AE1 T", "AE1 N", false);
        assert_eq!(a, vec!["AE1", "T"]);
        assert_eq!(b, vec!["AE1", "N"]);
    }

    #[test]
    fn test_key_tokens_spelled_keys_use_chars() {
        let (a, b) = key_tokens("ight", "ite", true);
        assert_eq!(a, vec!["i", "g", "h", "t"]);
        assert_eq!(b, vec!["i", "t", "e"]);
    }

    #[test]
    fn test_key_tokens_whitespace_only_key_falls_back_to_chars() {
        let (a, b) = key_tokens(" ", "AE1 T", false);
        assert_eq!(a, vec![" "]);
        assert_eq!(b.len(), 5);
    }
}
