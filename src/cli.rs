use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

use crate::config::{DEFAULT_CANDIDATE_BONUS, DEFAULT_SAMPLE_SIZE, SolverConfig, StrategyKind};
use crate::feedback::FeedbackPattern;
use crate::game_state::{GameInterface, GameOutcome, UserAction};
use crate::solver::entropy;
use crate::word::Word;
use crate::{MAX_TURNS, Result};

/// Wordle helper: suggests guesses and narrows candidates from feedback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'i', long = "input", global = true)]
    pub wordbank_path: Option<PathBuf>,

    /// Guesses must reuse every green and yellow letter from the previous turn
    #[arg(long, global = true)]
    pub hard: bool,

    #[arg(long, value_enum, default_value_t = StrategyKind::Entropy, global = true)]
    pub strategy: StrategyKind,

    /// Candidates sampled when scoring entropy
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE, global = true)]
    pub sample_size: usize,

    /// Score bonus for guesses that could be the answer
    #[arg(long, default_value_t = DEFAULT_CANDIDATE_BONUS, global = true)]
    pub bonus: f64,

    #[arg(long, default_value_t = MAX_TURNS, global = true)]
    pub max_turns: usize,

    /// Only guess words that could still be the answer
    #[arg(long, global = true)]
    pub candidates_only: bool,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, entering the feedback for each suggestion (default)
    Play,
    /// Simulate a game against a known target word
    Solve { target: String },
    /// Simulate every word in the list and report how many turns each took
    Bench {
        /// Only simulate the first N words
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the most informative opening guesses
    Rank {
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

impl Cli {
    pub fn solver_config(&self) -> Result<SolverConfig> {
        SolverConfig {
            strategy: self.strategy,
            hard_mode: self.hard,
            sample_size: self.sample_size,
            candidate_bonus: self.bonus,
            max_turns: self.max_turns,
            use_all_words: !self.candidates_only,
        }
        .validate()
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses a feedback line: `PATTERN`, `WORD PATTERN`, or `exit`/`quit`.
pub fn parse_feedback_line(line: &str) -> Result<UserAction> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [cmd] if cmd.eq_ignore_ascii_case("exit") || cmd.eq_ignore_ascii_case("quit") => Ok(UserAction::Exit),
        [pattern] => Ok(UserAction::Feedback {
            played: None,
            pattern: FeedbackPattern::parse(pattern)?,
        }),
        [word, pattern] => Ok(UserAction::Feedback {
            played: Some(Word::new(word)?),
            pattern: FeedbackPattern::parse(pattern)?,
        }),
        _ => Ok(UserAction::Invalid),
    }
}

pub fn display_candidates(candidates: &[Word]) {
    println!("{} possible words remain.", candidates.len());
    if candidates.len() > 1 && candidates.len() <= 10 {
        let list: Vec<String> = candidates.iter().map(Word::to_uppercase).collect();
        println!("Remaining candidates: {}", list.join(", "));
    }
}

pub fn display_outcome(outcome: &GameOutcome) {
    match outcome {
        GameOutcome::Solved { turns } => println!("Solved in {} turns!", turns.len()),
        GameOutcome::OutOfTurns { .. } => println!("Out of turns. Try again!"),
        GameOutcome::Abandoned { .. } => println!("Exiting."),
    }
}

/// Terminal front end: prints suggestions and reads feedback lines.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_feedback(&mut self, guess: &Word) -> Result<UserAction> {
        println!("Enter feedback for {} (G=green, Y=yellow, _=gray, e.g. G_Y__; or WORD PATTERN; 'exit' to quit):", guess.to_uppercase());
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(UserAction::Exit);
        }

        match parse_feedback_line(&input) {
            Ok(UserAction::Invalid) | Err(_) => {
                println!("Invalid feedback. Use five of G, Y or _ (e.g. G_Y__), optionally after the word you played.");
                Ok(UserAction::Invalid)
            }
            Ok(action) => Ok(action),
        }
    }

    fn display_suggestion(&mut self, turn: usize, guess: &Word, candidates: &[Word]) {
        println!(
            "\nTurn {turn}: Try guess -> {} ({:.2} bits, {} candidates)",
            guess.to_uppercase(),
            entropy(guess, candidates),
            candidates.len()
        );
    }

    fn display_candidates(&mut self, candidates: &[Word]) {
        display_candidates(candidates);
    }

    fn display_outcome(&mut self, outcome: &GameOutcome) {
        display_outcome(outcome);
    }
}
