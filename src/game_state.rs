use std::collections::BTreeMap;

use rand::Rng;

use crate::config::SolverConfig;
use crate::feedback::FeedbackPattern;
use crate::solver::filter_candidates;
use crate::strategy::{GuessStrategy, pick_guess};
use crate::word::Word;
use crate::{Result, WordleError, debug_log, info_log};

/// A guess and the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessContext {
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

/// One finished turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: FeedbackPattern,
    /// Candidates left after applying the feedback.
    pub remaining: usize,
}

/// Everything that carries over from one turn to the next.
#[derive(Debug, Clone)]
pub struct GameState {
    candidates: Vec<Word>,
    last: Option<GuessContext>,
    history: Vec<TurnRecord>,
}

impl GameState {
    pub fn new(words: &[Word]) -> Self {
        Self {
            candidates: words.to_vec(),
            last: None,
            history: Vec::new(),
        }
    }

    /// Turns played so far.
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn last(&self) -> Option<&GuessContext> {
        self.last.as_ref()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Narrows the candidates with a turn's feedback and records the turn.
    pub fn apply(&mut self, guess: Word, feedback: FeedbackPattern) {
        let before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, &guess, &feedback);
        debug_log!(
            "turn {}: {} {} narrowed {} -> {}",
            self.turn() + 1,
            guess,
            feedback,
            before,
            self.candidates.len()
        );
        self.last = Some(GuessContext { guess, feedback });
        self.history.push(TurnRecord {
            guess,
            feedback,
            remaining: self.candidates.len(),
        });
    }

    fn into_history(self) -> Vec<TurnRecord> {
        self.history
    }
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Solved { turns: Vec<TurnRecord> },
    OutOfTurns { turns: Vec<TurnRecord>, remaining: Vec<Word> },
    Abandoned { turns: Vec<TurnRecord> },
}

impl GameOutcome {
    pub fn turns(&self) -> &[TurnRecord] {
        match self {
            Self::Solved { turns } | Self::OutOfTurns { turns, .. } | Self::Abandoned { turns } => turns,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// What the feedback source answered for a suggested guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Feedback for the suggestion, or for `played` if a different word was entered.
    Feedback { played: Option<Word>, pattern: FeedbackPattern },
    Invalid,
    Exit,
}

/// Where feedback comes from and where progress goes.
/// Implemented by the terminal front end and by simulated games.
pub trait GameInterface {
    fn read_feedback(&mut self, guess: &Word) -> Result<UserAction>;

    fn display_suggestion(&mut self, _turn: usize, _guess: &Word, _candidates: &[Word]) {}

    fn display_candidates(&mut self, _candidates: &[Word]) {}

    fn display_outcome(&mut self, _outcome: &GameOutcome) {}
}

/// Answers every guess with the feedback a known target would produce.
pub struct SimulatedInterface {
    target: Word,
}

impl SimulatedInterface {
    pub fn new(target: Word) -> Self {
        Self { target }
    }
}

impl GameInterface for SimulatedInterface {
    fn read_feedback(&mut self, guess: &Word) -> Result<UserAction> {
        Ok(UserAction::Feedback {
            played: None,
            pattern: FeedbackPattern::compute(guess, &self.target),
        })
    }
}

/// Plays one game: suggest, read feedback, filter, until solved, out of
/// turns, or the interface gives up.
///
/// Fails with `RecoveryImpossible` as soon as no candidate fits the feedback.
pub fn play<I, R>(words: &[Word], config: &SolverConfig, interface: &mut I, rng: &mut R) -> Result<GameOutcome>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let strategy = config.strategy();
    let all_words = config.use_all_words.then_some(words);
    let mut state = GameState::new(words);

    while state.turn() < config.max_turns {
        let turn = state.turn() + 1;
        let Some(suggestion) = next_guess(&state, all_words, &strategy, config, rng) else {
            return Err(WordleError::RecoveryImpossible { turn: state.turn() });
        };
        interface.display_suggestion(turn, &suggestion, state.candidates());

        let (guess, pattern) = loop {
            match interface.read_feedback(&suggestion)? {
                UserAction::Feedback { played, pattern } => break (played.unwrap_or(suggestion), pattern),
                UserAction::Invalid => continue,
                UserAction::Exit => {
                    let outcome = GameOutcome::Abandoned {
                        turns: state.into_history(),
                    };
                    interface.display_outcome(&outcome);
                    return Ok(outcome);
                }
            }
        };

        state.apply(guess, pattern);

        if pattern.is_solved() {
            info_log!("solved with {} in {} turns", guess, turn);
            let outcome = GameOutcome::Solved {
                turns: state.into_history(),
            };
            interface.display_outcome(&outcome);
            return Ok(outcome);
        }
        interface.display_candidates(state.candidates());
        if state.candidates().is_empty() {
            return Err(WordleError::RecoveryImpossible { turn });
        }
    }

    info_log!("out of turns with {} candidates left", state.candidates().len());
    let remaining = state.candidates().to_vec();
    let outcome = GameOutcome::OutOfTurns {
        turns: state.into_history(),
        remaining,
    };
    interface.display_outcome(&outcome);
    Ok(outcome)
}

fn next_guess<S, R>(
    state: &GameState,
    all_words: Option<&[Word]>,
    strategy: &S,
    config: &SolverConfig,
    rng: &mut R,
) -> Option<Word>
where
    S: GuessStrategy,
    R: Rng + ?Sized,
{
    pick_guess(
        state.candidates(),
        all_words,
        strategy,
        config.hard_mode,
        state.last(),
        rng,
    )
}

/// Plays a game against a known target. The target does not have to be in
/// `words`.
pub fn simulate<R: Rng + ?Sized>(words: &[Word], target: Word, config: &SolverConfig, rng: &mut R) -> Result<GameOutcome> {
    play(words, config, &mut SimulatedInterface::new(target), rng)
}

/// Aggregated results of simulating many targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Number of games solved in each turn count.
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub games: usize,
}

impl BenchmarkReport {
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Average turns over solved games.
    pub fn average_turns(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(turns, count)| turns * count).sum();
        total as f64 / solved as f64
    }
}

/// Simulates a game for every target, one after another.
pub fn benchmark<R: Rng + ?Sized>(
    words: &[Word],
    targets: &[Word],
    config: &SolverConfig,
    rng: &mut R,
) -> Result<BenchmarkReport> {
    let mut report = BenchmarkReport::default();
    for &target in targets {
        report.games += 1;
        match simulate(words, target, config, rng) {
            Ok(GameOutcome::Solved { turns }) => *report.distribution.entry(turns.len()).or_insert(0) += 1,
            Ok(_) => report.failures.push(target),
            Err(WordleError::RecoveryImpossible { .. }) => {
                log::warn!("lost track of {target} during benchmark");
                report.failures.push(target);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
