use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::word::Word;
use crate::{Result, WordleError, debug_log};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Accumulates words in first-seen order, dropping duplicates and lines that
/// are not five letters.
#[derive(Default)]
struct WordbankBuilder {
    seen: HashSet<Word>,
    words: Vec<Word>,
}

impl WordbankBuilder {
    fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match Word::new(line) {
            Ok(word) => {
                if self.seen.insert(word) {
                    self.words.push(word);
                }
            }
            Err(_) => {
                debug_log!("skipping wordbank line {:?}", line);
            }
        }
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    let mut builder = WordbankBuilder::default();
    for line in data.lines() {
        builder.push_line(line);
    }
    builder.words
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut builder = WordbankBuilder::default();
    for line in reader.lines() {
        builder.push_line(&line?);
    }
    if builder.words.is_empty() {
        return Err(WordleError::EmptyWordList);
    }
    Ok(builder.words)
}

pub fn load_embedded_wordbank() -> Vec<Word> {
    load_wordbank_from_str(EMBEDDED_WORDBANK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_normalizes_and_filters() {
        let words = load_wordbank_from_str("  CRANE \nslate\ncranes\nab1de\n\ntrace\n");
        let text: Vec<String> = words.iter().map(Word::to_string).collect();
        assert_eq!(text, vec!["crane", "slate", "trace"]);
    }

    #[test]
    fn test_load_drops_duplicates_keeping_order() {
        let words = load_wordbank_from_str("slate\ncrane\nSLATE\ntrace\ncrane");
        let text: Vec<String> = words.iter().map(Word::to_string).collect();
        assert_eq!(text, vec!["slate", "crane", "trace"]);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let words = load_embedded_wordbank();
        assert!(words.len() > 100);
        assert!(words.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_wordbank_from_file("/definitely/not/a/wordbank.txt");
        assert!(matches!(result, Err(WordleError::Io(_))));
    }

    #[test]
    fn test_load_from_file_without_words() {
        let path = std::env::temp_dir().join("wordle_helper_empty_wordbank.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "toolong").unwrap();
            writeln!(file, "abc").unwrap();
        }
        let result = load_wordbank_from_file(&path);
        assert!(matches!(result, Err(WordleError::EmptyWordList)));
        let _ = std::fs::remove_file(&path);
    }
}
