//! Feedback simulation.
//!
//! Computes the green/yellow/gray pattern the game reports for a guess
//! against a target word, and parses patterns typed in by a player.

use std::fmt;
use std::str::FromStr;

use crate::word::{Word, letter_index};
use crate::{Result, WORD_LENGTH, WordleError};

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in the correct position.
    Green,
    /// Letter is in the word, but somewhere else.
    Yellow,
    /// Letter is not in the word, or every copy of it is already accounted for.
    Gray,
}

impl Feedback {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' | '2' => Some(Feedback::Green),
            'Y' | '1' => Some(Feedback::Yellow),
            'X' | 'B' | '_' | '.' | '-' | '0' => Some(Feedback::Gray),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Green => 'G',
            Feedback::Yellow => 'Y',
            Feedback::Gray => '_',
        }
    }

    /// Green or yellow.
    pub fn is_hit(self) -> bool {
        self != Feedback::Gray
    }

    fn digit(self) -> usize {
        match self {
            Feedback::Gray => 0,
            Feedback::Yellow => 1,
            Feedback::Green => 2,
        }
    }
}

/// The five marks a guess receives against one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    pub const SOLVED: Self = Self([Feedback::Green; WORD_LENGTH]);

    /// Number of distinct patterns (3^5).
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(marks: [Feedback; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Scores `guess` against `target` the way the game does.
    ///
    /// Greens are assigned first and consume their target letter. Each
    /// remaining guess letter then turns yellow only while the target still
    /// has an unconsumed copy of it, so repeated letters never earn more
    /// marks than the target holds.
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();
        let mut marks = [Feedback::Gray; WORD_LENGTH];
        let mut unconsumed = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                marks[i] = Feedback::Green;
            } else {
                unconsumed[letter_index(target[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] == Feedback::Green {
                continue;
            }
            let slot = &mut unconsumed[letter_index(guess[i])];
            if *slot > 0 {
                marks[i] = Feedback::Yellow;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    pub fn marks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Base-3 encoding in `0..NUM_PATTERNS`, for bucket tables.
    pub fn index(&self) -> usize {
        self.0.iter().rev().fold(0, |acc, mark| acc * 3 + mark.digit())
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    pub fn greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Feedback::Green).count()
    }

    /// Parses a pattern such as `G_Y__`, `gyxxx` or `21000`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || WordleError::InvalidFeedback(s.to_string());
        let marks: Vec<Feedback> = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let marks: [Feedback; WORD_LENGTH] = marks.try_into().map_err(|_| invalid())?;
        Ok(Self(marks))
    }
}

impl FromStr for FeedbackPattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
