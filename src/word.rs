use std::fmt;
use std::str::FromStr;

use crate::{Result, WORD_LENGTH, WordleError};

/// A five-letter, lowercase Wordle word.
///
/// Stored as raw ASCII bytes so it is `Copy` and cheap to hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parses a word, accepting either case. Anything that is not exactly
    /// five ASCII letters is rejected.
    pub fn new(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordleError::InvalidWord(text.to_string()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }

    pub fn to_uppercase(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Index of a lowercase letter into a 26-slot table.
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.to_string(), "crane");
        assert_eq!(word.to_uppercase(), "CRANE");
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Word::new("cran").is_err()); // Too short
        assert!(Word::new("cranes").is_err()); // Too long
        assert!(Word::new("cr4ne").is_err()); // Contains digit
        assert!(Word::new("cran ").is_err()); // Contains space
        assert!(Word::new("").is_err());
        assert!(matches!(Word::new("abc"), Err(WordleError::InvalidWord(s)) if s == "abc"));
    }

    #[test]
    fn test_letter_counts() {
        let word: Word = "sassy".parse().unwrap();
        assert_eq!(word.count(b's'), 3);
        assert_eq!(word.count(b'a'), 1);
        assert_eq!(word.count(b'z'), 0);
        assert!(word.contains(b'y'));
        assert!(!word.contains(b'e'));
    }

    #[test]
    fn test_equality_by_letters() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("caner").unwrap());
    }
}
