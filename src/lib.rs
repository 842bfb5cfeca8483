// Library interface for wordle-helper
// The binary and the integration tests both go through these modules

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod solver;
pub mod strategy;
pub mod word;
pub mod wordbank;

/// Number of letters in every Wordle word.
pub const WORD_LENGTH: usize = 5;

/// Turns allowed in a standard game.
pub const MAX_TURNS: usize = 6;

// Re-export commonly used items for easier testing
pub use config::{SolverConfig, StrategyKind};
pub use feedback::{Feedback, FeedbackPattern};
pub use game_state::{GameOutcome, GameState, GuessContext, play, simulate};
pub use solver::{HardModeConstraint, entropy, filter_candidates};
pub use strategy::{GuessStrategy, Strategy, pick_guess, rank_guesses};
pub use word::Word;
pub use wordbank::{load_embedded_wordbank, load_wordbank_from_file, load_wordbank_from_str};

/// The errors `wordle-helper` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("\"{0}\" is not a five-letter word")]
    InvalidWord(String),

    #[error("\"{0}\" is not a feedback pattern (use G, Y and _ or X, e.g. G_Y__)")]
    InvalidFeedback(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No word in the list is consistent with the feedback given so far.
    #[error("no candidates remain after turn {turn}; the feedback does not match any word in the list")]
    RecoveryImpossible { turn: usize },

    #[error("the word list does not contain any five-letter words")]
    EmptyWordList,

    #[error("could not read the word list")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
