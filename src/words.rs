//! The candidate dictionary: a normalized, deduplicated set of words.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{PuzzleError, Result};

/// A candidate word. Cheap to clone (shared storage) and totally ordered,
/// which gives deterministic iteration and tie-breaking wherever words are
/// kept in ordered sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Arc<str>);

impl Word {
    /// Creates a word, normalizing to uppercase.
    pub fn new(text: &str) -> Self {
        Self(text.to_uppercase().into())
    }

    /// Length in characters (grid cells), not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The character occupying cell `index`, or `None` past the end.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.chars().nth(index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The full dictionary, sorted and deduplicated.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Parses one word per line, trimming whitespace and skipping blanks.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Reads a word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut words: Vec<Word> = words.into_iter().map(Word::new).collect();
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList.into());
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
