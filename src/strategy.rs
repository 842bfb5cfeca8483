//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait, the entropy and letter-frequency
//! strategies, and `pick_guess`, which applies the rules shared by both.

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, index};

use crate::config::{DEFAULT_CANDIDATE_BONUS, DEFAULT_SAMPLE_SIZE};
use crate::debug_log;
use crate::game_state::GuessContext;
use crate::solver::{HardModeConstraint, entropy, letter_frequency};
use crate::word::{Word, letter_index};

/// A way of choosing the next guess.
pub trait GuessStrategy {
    /// Chooses a guess for `candidates` from `guess_pool`.
    ///
    /// The pool may be empty (hard mode can rule out every word). Returns
    /// `None` only when `candidates` is empty.
    fn select<R: Rng + ?Sized>(&self, candidates: &[Word], guess_pool: &[Word], rng: &mut R) -> Option<Word>;
}

/// Picks the guess whose feedback carries the most information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyStrategy {
    /// Entropy is measured against at most this many candidates.
    pub sample_size: usize,
    /// Added to the score of a guess that could itself be the answer.
    pub candidate_bonus: f64,
}

impl Default for EntropyStrategy {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            candidate_bonus: DEFAULT_CANDIDATE_BONUS,
        }
    }
}

impl EntropyStrategy {
    fn sample<'a, R: Rng + ?Sized>(&self, candidates: &'a [Word], rng: &mut R) -> Cow<'a, [Word]> {
        if candidates.len() <= self.sample_size {
            return Cow::Borrowed(candidates);
        }
        let picked = index::sample(rng, candidates.len(), self.sample_size);
        Cow::Owned(picked.iter().map(|i| candidates[i]).collect())
    }
}

impl GuessStrategy for EntropyStrategy {
    fn select<R: Rng + ?Sized>(&self, candidates: &[Word], guess_pool: &[Word], rng: &mut R) -> Option<Word> {
        if candidates.is_empty() {
            return None;
        }
        if guess_pool.is_empty() {
            return candidates.choose(rng).copied();
        }

        let sample = self.sample(candidates, rng);
        let viable: HashSet<&Word> = candidates.iter().collect();

        let mut best: Option<(Word, f64)> = None;
        for guess in guess_pool {
            let mut score = entropy(guess, &sample);
            if viable.contains(guess) {
                score += self.candidate_bonus;
            }
            // Strictly greater, so ties go to the earliest word in the pool
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((*guess, score));
            }
        }

        debug_log!(
            "entropy pick {:?} over {} guesses, {} sampled candidates",
            best,
            guess_pool.len(),
            sample.len()
        );
        best.map(|(word, _)| word)
    }
}

/// Cheap fallback: a random candidate containing the five letters that
/// appear in the most candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    /// The five most widespread letters; ties keep first-seen order.
    fn top_letters(candidates: &[Word]) -> Vec<u8> {
        let freq = letter_frequency(candidates);
        let mut letters: Vec<u8> = Vec::new();
        for word in candidates {
            for &b in word.letters() {
                if !letters.contains(&b) {
                    letters.push(b);
                }
            }
        }
        letters.sort_by_key(|&b| Reverse(freq[letter_index(b)]));
        letters.truncate(5);
        letters
    }
}

impl GuessStrategy for FrequencyStrategy {
    fn select<R: Rng + ?Sized>(&self, candidates: &[Word], _guess_pool: &[Word], rng: &mut R) -> Option<Word> {
        let top = Self::top_letters(candidates);
        let covering: Vec<Word> = candidates
            .iter()
            .filter(|word| top.iter().all(|&b| word.contains(b)))
            .copied()
            .collect();

        if covering.is_empty() {
            candidates.choose(rng).copied()
        } else {
            covering.choose(rng).copied()
        }
    }
}

/// Runtime choice of strategy, dispatched statically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Entropy(EntropyStrategy),
    Frequency(FrequencyStrategy),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy::default())
    }
}

impl GuessStrategy for Strategy {
    fn select<R: Rng + ?Sized>(&self, candidates: &[Word], guess_pool: &[Word], rng: &mut R) -> Option<Word> {
        match self {
            Self::Entropy(s) => s.select(candidates, guess_pool, rng),
            Self::Frequency(s) => s.select(candidates, guess_pool, rng),
        }
    }
}

/// Suggests the next guess.
///
/// A lone candidate is returned as is. Otherwise the pool is `all_words`
/// (or the candidates when no word list is given), narrowed by the hard-mode
/// rule when `hard_mode` is on and a previous turn exists.
pub fn pick_guess<S, R>(
    candidates: &[Word],
    all_words: Option<&[Word]>,
    strategy: &S,
    hard_mode: bool,
    last: Option<&GuessContext>,
    rng: &mut R,
) -> Option<Word>
where
    S: GuessStrategy,
    R: Rng + ?Sized,
{
    match candidates {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let pool = all_words.filter(|words| !words.is_empty()).unwrap_or(candidates);
    let constraint = last
        .filter(|_| hard_mode)
        .map(|ctx| HardModeConstraint::new(&ctx.guess, &ctx.feedback))
        .filter(|c| !c.is_empty());
    let pool: Cow<'_, [Word]> = match constraint {
        Some(constraint) => Cow::Owned(pool.iter().filter(|w| constraint.admits(w)).copied().collect()),
        None => Cow::Borrowed(pool),
    };

    strategy.select(candidates, &pool, rng)
}

/// A guess and how much it would tell us.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    pub entropy: f64,
    pub is_candidate: bool,
}

/// Scores every word in `pool` against all `candidates` and keeps the best
/// `n`, highest entropy first. Candidates win ties.
pub fn rank_guesses(pool: &[Word], candidates: &[Word], n: usize) -> Vec<GuessScore> {
    let viable: HashSet<&Word> = candidates.iter().collect();
    let mut scores: Vec<GuessScore> = pool
        .iter()
        .map(|word| GuessScore {
            word: *word,
            entropy: entropy(word, candidates),
            is_candidate: viable.contains(word),
        })
        .collect();

    scores.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then(b.is_candidate.cmp(&a.is_candidate))
    });
    scores.truncate(n);
    scores
}
