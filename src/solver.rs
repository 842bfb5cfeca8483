//! Candidate filtering and information scoring.

use crate::WORD_LENGTH;
use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::{Word, letter_index};

/// Keeps the candidates consistent with `feedback` for `guess`.
///
/// Green fixes a letter in place. Yellow requires the letter elsewhere in the
/// word. Gray pins the letter's total count to the number of green and yellow
/// marks that letter earned across the whole row, which is zero when it earned
/// none.
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &FeedbackPattern) -> Vec<Word> {
    let confirmed = confirmed_counts(guess, feedback);
    candidates
        .iter()
        .filter(|word| is_consistent(word, guess, feedback, &confirmed))
        .copied()
        .collect()
}

/// Green and yellow marks per guess letter, counted once over the row.
fn confirmed_counts(guess: &Word, feedback: &FeedbackPattern) -> [usize; 26] {
    let mut counts = [0; 26];
    for (&g, mark) in guess.letters().iter().zip(feedback.marks()) {
        if mark.is_hit() {
            counts[letter_index(g)] += 1;
        }
    }
    counts
}

fn is_consistent(word: &Word, guess: &Word, feedback: &FeedbackPattern, confirmed: &[usize; 26]) -> bool {
    let letters = word.letters();
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .enumerate()
        .all(|(i, (&g, mark))| match mark {
            Feedback::Green => letters[i] == g,
            Feedback::Yellow => letters[i] != g && word.contains(g),
            Feedback::Gray => match confirmed[letter_index(g)] {
                0 => !word.contains(g),
                k => word.count(g) == k,
            },
        })
}

/// Shannon entropy, in bits, of the feedback patterns `guess` produces
/// across `candidates`. Zero for an empty set.
pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets = [0u32; FeedbackPattern::NUM_PATTERNS];
    for candidate in candidates {
        buckets[FeedbackPattern::compute(guess, candidate).index()] += 1;
    }

    let total = candidates.len() as f64;
    let mut bits = 0.0;
    for &count in &buckets {
        if count > 0 {
            let p = f64::from(count) / total;
            bits -= p * p.log2();
        }
    }
    bits
}

/// How many words contain each letter, counting a letter once per word.
pub fn letter_frequency(words: &[Word]) -> [usize; 26] {
    let mut freq = [0; 26];
    for word in words {
        let mut seen = [false; 26];
        for &b in word.letters() {
            let idx = letter_index(b);
            if !seen[idx] {
                seen[idx] = true;
                freq[idx] += 1;
            }
        }
    }
    freq
}

/// Letters revealed by the previous guess that the next guess must reuse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraint {
    pub required_positions: [Option<u8>; WORD_LENGTH],
    /// Yellow letters paired with the position they may not occupy.
    pub required_letters: Vec<(u8, usize)>,
}

impl HardModeConstraint {
    pub fn new(guess: &Word, feedback: &FeedbackPattern) -> Self {
        let mut constraint = Self::default();
        for (i, (&g, mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Feedback::Green => constraint.required_positions[i] = Some(g),
                Feedback::Yellow => constraint.required_letters.push((g, i)),
                Feedback::Gray => {}
            }
        }
        constraint
    }

    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();
        let greens_hold = self
            .required_positions
            .iter()
            .zip(letters)
            .all(|(required, &b)| required.is_none_or(|r| r == b));
        greens_hold
            && self
                .required_letters
                .iter()
                .all(|&(g, i)| letters[i] != g && word.contains(g))
    }

    pub fn is_empty(&self) -> bool {
        self.required_positions.iter().all(Option::is_none) && self.required_letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> FeedbackPattern {
        FeedbackPattern::parse(text).unwrap()
    }

    #[test]
    fn test_filter_green_yellow_gray() {
        let candidates = words(&["crane", "trace", "crate", "slate", "react"]);
        // target "crate"
        let feedback = FeedbackPattern::compute(&w("trace"), &w("crate"));
        let filtered = filter_candidates(&candidates, &w("trace"), &feedback);
        assert!(filtered.contains(&w("crate")));
        assert!(!filtered.contains(&w("trace")));
        assert!(!filtered.contains(&w("slate")));
    }

    #[test]
    fn test_filter_gray_letter_with_confirmed_copy_sets_exact_count() {
        // "sassy" against "casts": one S yellow, one S green, one S gray => exactly two S
        let candidates = words(&["casts", "basks", "oasis", "tasss", "gassy", "class", "sassy"]);
        let filtered = filter_candidates(&candidates, &w("sassy"), &pattern("YGG__"));
        assert_eq!(filtered, words(&["casts", "basks", "oasis"]));
    }

    #[test]
    fn test_filter_gray_letter_rejects_too_few_copies() {
        // "basin" fits every green and yellow mark but holds a single S
        let candidates = words(&["basin", "oasis"]);
        let filtered = filter_candidates(&candidates, &w("sassy"), &pattern("YGG__"));
        assert_eq!(filtered, words(&["oasis"]));
    }

    #[test]
    fn test_filter_repeated_e_row() {
        // "geese" against "creep": E yellow, E green, E gray => exactly two E
        let candidates = words(&["creep", "creed", "theme", "treee", "terse", "eerie"]);
        let filtered = filter_candidates(&candidates, &w("geese"), &pattern("_YG__"));
        assert_eq!(filtered, words(&["creep", "creed", "theme"]));
    }

    #[test]
    fn test_filter_gray_without_confirmed_copy_excludes_letter() {
        let candidates = words(&["speed", "creep", "preen", "sleep", "steep"]);
        let filtered = filter_candidates(&candidates, &w("speed"), &pattern("_YGG_"));
        assert_eq!(filtered, words(&["creep", "preen"]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let candidates = words(&["crane", "slate", "trace", "grate", "plate", "arose", "stare"]);
        let feedback = pattern("__G_G");
        let once = filter_candidates(&candidates, &w("crane"), &feedback);
        let twice = filter_candidates(&once, &w("crane"), &feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_never_drops_target() {
        let list = words(&[
            "crane", "slate", "trace", "grate", "plate", "sassy", "casts", "geese", "creep", "speed",
            "eerie", "there", "llama", "label", "arose",
        ]);
        for guess in &list {
            for target in &list {
                let feedback = FeedbackPattern::compute(guess, target);
                let filtered = filter_candidates(&list, guess, &feedback);
                assert!(filtered.contains(target), "{guess} vs {target} dropped the target");
            }
        }
    }

    #[test]
    fn test_entropy_empty_and_single() {
        assert_eq!(entropy(&w("crane"), &[]), 0.0);
        assert_eq!(entropy(&w("crane"), &words(&["slate"])), 0.0);
    }

    #[test]
    fn test_entropy_zero_when_every_pattern_matches() {
        let candidates = words(&["crane", "slate", "trace"]);
        assert_eq!(entropy(&w("moody"), &candidates), 0.0);
    }

    #[test]
    fn test_entropy_all_distinct_patterns() {
        let candidates = words(&["crane", "slate", "trace", "grate"]);
        let bits = entropy(&w("crane"), &candidates);
        assert!((bits - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_bounded_by_distinct_patterns() {
        let candidates = words(&["crane", "slate", "trace", "grate", "plate", "arose", "stare"]);
        for guess in &candidates {
            let mut seen = std::collections::HashSet::new();
            for c in &candidates {
                seen.insert(FeedbackPattern::compute(guess, c));
            }
            let bits = entropy(guess, &candidates);
            assert!(bits >= 0.0);
            assert!(bits <= (seen.len() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn test_letter_frequency_counts_once_per_word() {
        let freq = letter_frequency(&words(&["sassy", "casts"]));
        assert_eq!(freq[letter_index(b's')], 2);
        assert_eq!(freq[letter_index(b'a')], 2);
        assert_eq!(freq[letter_index(b'y')], 1);
        assert_eq!(freq[letter_index(b'z')], 0);
    }

    #[test]
    fn test_hard_mode_green_only() {
        let constraint = HardModeConstraint::new(&w("crane"), &pattern("G____"));
        assert!(constraint.admits(&w("cloud")));
        assert!(constraint.admits(&w("crane")));
        assert!(!constraint.admits(&w("slate")));
        assert!(!constraint.admits(&w("trace")));
    }

    #[test]
    fn test_hard_mode_yellow_requires_letter_elsewhere() {
        let constraint = HardModeConstraint::new(&w("crane"), &pattern("_Y___"));
        assert!(constraint.admits(&w("board"))); // R present, not in position 1
        assert!(!constraint.admits(&w("trace"))); // R in the yellow position
        assert!(!constraint.admits(&w("slate"))); // no R
    }

    #[test]
    fn test_hard_mode_empty_constraint() {
        let constraint = HardModeConstraint::new(&w("crane"), &pattern("_____"));
        assert!(constraint.is_empty());
        assert!(constraint.admits(&w("crane")));
    }
}
