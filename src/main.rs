use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

use wordle_helper::cli::{CliInterface, Command, parse_cli};
use wordle_helper::game_state::{GameOutcome, benchmark};
use wordle_helper::logging::init_logging;
use wordle_helper::{
    Result, Word, WordleError, info_log, load_embedded_wordbank, load_wordbank_from_file, play,
    rank_guesses, simulate,
};

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: wordle_helper::cli::Cli) -> Result<()> {
    let config = cli.solver_config()?;
    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_embedded_wordbank(),
    };
    if words.is_empty() {
        return Err(WordleError::EmptyWordList);
    }
    info_log!("loaded {} words, config {:?}", words.len(), config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            println!("Loaded {} words.", words.len());
            println!(
                "Using {:?} strategy{}.",
                config.strategy,
                if config.hard_mode { " in hard mode" } else { "" }
            );
            let mut interface = CliInterface::new(io::stdin().lock());
            play(&words, &config, &mut interface, &mut rng)?;
        }
        Command::Solve { target } => {
            let target = Word::new(&target)?;
            println!("Solving for: {}", target.to_uppercase());
            let outcome = simulate(&words, target, &config, &mut rng)?;
            for (i, turn) in outcome.turns().iter().enumerate() {
                println!(
                    "Guess {}: {} -> {} ({} left)",
                    i + 1,
                    turn.guess.to_uppercase(),
                    turn.feedback,
                    turn.remaining
                );
            }
            match outcome {
                GameOutcome::Solved { turns } => println!("Solved in {} guesses.", turns.len()),
                _ => println!("Failed to solve within {} guesses.", config.max_turns),
            }
        }
        Command::Bench { limit } => {
            let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];
            println!("Simulating {} games...", targets.len());
            let report = benchmark(&words, targets, &config, &mut rng)?;
            println!("Guess distribution:");
            for (turns, count) in &report.distribution {
                let pct = *count as f64 / report.games as f64 * 100.0;
                println!("  {turns} guesses: {count:>5} ({pct:>5.1}%)");
            }
            println!("Average guesses: {:.3}", report.average_turns());
            if report.failures.is_empty() {
                println!("All words solved within {} guesses.", config.max_turns);
            } else {
                let failed: Vec<String> = report.failures.iter().map(Word::to_uppercase).collect();
                println!("Not solved ({}): {}", failed.len(), failed.join(", "));
            }
        }
        Command::Rank { top } => {
            println!("{:>4} {:>8} {:>8} Possible?", "#", "Word", "Entropy");
            for (i, score) in rank_guesses(&words, &words, top).iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.3} {}",
                    i + 1,
                    score.word.to_uppercase(),
                    score.entropy,
                    if score.is_candidate { "yes" } else { "" }
                );
            }
        }
    }
    Ok(())
}
