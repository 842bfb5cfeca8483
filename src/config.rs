use clap::ValueEnum;

use crate::strategy::{EntropyStrategy, FrequencyStrategy, Strategy};
use crate::{MAX_TURNS, Result, WordleError};

/// Default number of candidates entropy is measured against.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Default score bonus for a guess that could itself be the answer.
pub const DEFAULT_CANDIDATE_BONUS: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Maximise expected information (Shannon entropy) of the feedback
    #[default]
    Entropy,
    /// Pick a candidate containing the five most common letters
    Frequency,
}

/// Settings for the guess selector and the game driver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub strategy: StrategyKind,
    pub hard_mode: bool,
    pub sample_size: usize,
    pub candidate_bonus: f64,
    pub max_turns: usize,
    /// Guess from the whole word list instead of only the remaining candidates.
    pub use_all_words: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            hard_mode: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
            candidate_bonus: DEFAULT_CANDIDATE_BONUS,
            max_turns: MAX_TURNS,
            use_all_words: true,
        }
    }
}

impl SolverConfig {
    pub fn validate(self) -> Result<Self> {
        if self.sample_size == 0 {
            return Err(WordleError::InvalidConfig("sample size must be at least 1".into()));
        }
        if !(self.candidate_bonus > 0.0 && self.candidate_bonus < 1.0) {
            return Err(WordleError::InvalidConfig(format!(
                "candidate bonus must be between 0 and 1, got {}",
                self.candidate_bonus
            )));
        }
        if self.max_turns == 0 {
            return Err(WordleError::InvalidConfig("max turns must be at least 1".into()));
        }
        Ok(self)
    }

    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Entropy => Strategy::Entropy(EntropyStrategy {
                sample_size: self.sample_size,
                candidate_bonus: self.candidate_bonus,
            }),
            StrategyKind::Frequency => Strategy::Frequency(FrequencyStrategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SolverConfig::default().validate().unwrap();
        assert_eq!(config.sample_size, 50);
        assert_eq!(config.max_turns, 6);
        assert!(matches!(config.strategy(), Strategy::Entropy(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_sample = SolverConfig { sample_size: 0, ..Default::default() };
        assert!(matches!(zero_sample.validate(), Err(WordleError::InvalidConfig(_))));

        let big_bonus = SolverConfig { candidate_bonus: 1.5, ..Default::default() };
        assert!(big_bonus.validate().is_err());

        let no_bonus = SolverConfig { candidate_bonus: 0.0, ..Default::default() };
        assert!(no_bonus.validate().is_err());

        let no_turns = SolverConfig { max_turns: 0, ..Default::default() };
        assert!(no_turns.validate().is_err());
    }

    #[test]
    fn test_frequency_strategy_selected() {
        let config = SolverConfig { strategy: StrategyKind::Frequency, ..Default::default() };
        assert!(matches!(config.strategy(), Strategy::Frequency(_)));
    }
}
