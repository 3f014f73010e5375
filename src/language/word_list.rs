use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Language;
use crate::error::{Error, Result};

/// A non-empty dictionary the word queue draws from.
///
/// Emptiness is rejected at construction so that picking a word can never
/// fail later on.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    origin: String,
    words: Vec<String>,
}

impl WordList {
    pub fn new(origin: impl Into<String>, words: Vec<String>) -> Result<Self> {
        let origin = origin.into();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(Error::EmptyWordList { origin });
        }

        Ok(Self { origin, words })
    }

    pub fn from_language(name: &str) -> Result<Self> {
        let lang = Language::new(name)?;
        Self::new(lang.name, lang.words)
    }

    /// Reads a plain text file with one word per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path.display().to_string(), &text)
    }

    pub fn parse(origin: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(origin, text.lines().map(str::to_string).collect())
    }

    pub fn origin(&self) -> &str {
        &self.origin
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

    /// Uniform random pick.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // never empty, see `new`
        self.words.choose(rng).map(String::as_str).unwrap_or_default()
    }
}
