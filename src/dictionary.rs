/// Loading the list of candidate secrets.
///
/// Loading never fails outright: any problem is logged and an empty
/// `Dictionary` comes back, which the caller treats as "cannot start".
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, error, warn};

use crate::games::wordle::WORD_LENGTH;

const EMBEDDED_WORDS: &str = include_str!("../words/words.txt");

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Splits `text` into lines and keeps the trimmed, lowercased
    /// five-letter words, in order.
    pub fn parse(text: &str) -> Self {
        let mut words = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                warn!(line = lineno + 1, word, "skipping malformed dictionary entry");
                continue;
            }
            words.push(word.to_ascii_lowercase());
        }

        Self { words }
    }

    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_WORDS)
    }

    /// Loads from `source`. Returns an empty dictionary on any failure.
    pub async fn load(source: &WordSource) -> Self {
        match Self::try_load(source).await {
            Ok(dictionary) => {
                debug!(?source, words = dictionary.len(), "dictionary loaded");
                dictionary
            }
            Err(e) => {
                error!(?source, error = %format!("{e:#}"), "error fetching words");
                Self::default()
            }
        }
    }

    async fn try_load(source: &WordSource) -> Result<Self> {
        let dictionary = match source {
            WordSource::Embedded => Self::embedded(),
            WordSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read word list {}", path.display()))?;
                Self::parse(&text)
            }
        };

        anyhow::ensure!(!dictionary.is_empty(), "word list has no {WORD_LENGTH}-letter words");
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_skips_junk() {
        let dict = Dictionary::parse("crane\r\n  Slate \n\nab\nfive5\nadieu\n");
        assert_eq!(dict.words(), ["crane", "slate", "adieu"]);
    }

    #[test]
    fn embedded_list_is_usable() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.words().iter().all(|w| w.len() == WORD_LENGTH));
    }

    #[test]
    fn contains_ignores_case() {
        let dict = Dictionary::parse("crane\n");
        assert!(dict.contains("CRANE"));
        assert!(!dict.contains("slate"));
    }
}
