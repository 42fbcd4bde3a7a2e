//! Word list loading
//!
//! A `WordList` is the dictionary of one game length: it supplies random
//! secrets and answers membership queries on normalized forms.

use super::PALAVRAS;
use crate::core::{Word, normalize_word};
use crate::game::WordValidator;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list has no {length}-letter words")]
    Empty { length: usize },
}

/// Words of a single length, deduplicated by normalized form
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
    length: usize,
}

impl WordList {
    /// Build a word list from raw entries
    ///
    /// Entries are trimmed; blank entries, entries of another length and
    /// entries that are not valid words are skipped.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if no entry is usable.
    pub fn from_entries<'a, I>(entries: I, length: usize) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed, length) {
                Ok(word) => {
                    if index.insert(word.normalized_text()) {
                        words.push(word);
                    }
                }
                Err(e) => debug!(entry = trimmed, error = %e, "skipping word list entry"),
            }
        }

        if words.is_empty() {
            return Err(CorpusError::Empty { length });
        }

        Ok(Self {
            words,
            index,
            length,
        })
    }

    /// Build a word list from text with one word per line
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if no line holds a usable word.
    ///
    /// # Examples
    /// ```
    /// use termo::wordlists::WordList;
    ///
    /// let list = WordList::from_text("termo\nsagaz\ncasa\n", 5).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("Termo"));
    /// ```
    pub fn from_text(text: &str, length: usize) -> Result<Self, CorpusError> {
        Self::from_entries(text.lines(), length)
    }

    /// Use the corpus compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if the embedded corpus has no words of
    /// this length.
    pub fn embedded(length: usize) -> Result<Self, CorpusError> {
        let list = Self::from_entries(PALAVRAS.iter().copied(), length)?;
        info!(words = list.len(), length, "loaded embedded word list");
        Ok(list)
    }

    /// Load words from a file
    ///
    /// Lines that are not valid UTF-8 are skipped with a warning rather than
    /// failing the whole file.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if the file cannot be read and
    /// `CorpusError::Empty` if it holds no usable word.
    ///
    /// # Examples
    /// ```no_run
    /// use termo::wordlists::WordList;
    ///
    /// let list = WordList::load_from_file("data/palavras.txt", 5).unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = content
            .split(|&b| b == b'\n')
            .enumerate()
            .filter_map(|(number, raw)| match std::str::from_utf8(raw) {
                Ok(line) => Some(line),
                Err(_) => {
                    warn!(path = %path.display(), line = number + 1, "skipping non-UTF-8 line");
                    None
                }
            });

        let list = Self::from_entries(lines, length)?;
        info!(path = %path.display(), words = list.len(), length, "loaded word list");
        Ok(list)
    }

    /// Pick a random secret word
    ///
    /// Never `None` for a constructed list; the option comes from slice
    /// selection.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Whether `candidate` matches an entry once both are normalized
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(&normalize_word(candidate.trim()))
    }

    /// Find the entry matching `candidate`, in its original form
    #[must_use]
    pub fn find(&self, candidate: &str) -> Option<&Word> {
        let key = normalize_word(candidate.trim());
        self.words.iter().find(|w| w.normalized_text() == key)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Letters per word in this list
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for WordList {
    fn is_valid(&self, word: &Word) -> bool {
        self.index.contains(&word.normalized_text())
    }
}
