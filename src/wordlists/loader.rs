//! Word bank loading
//!
//! Reads a CSV word list with `word` and `occurrence` columns and keeps every
//! 5-letter word whose occurrence score reaches the configured threshold.

use super::EMBEDDED_WORDS_CSV;
use crate::core::{GRID_SIZE, Word};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Words rarer than this are treated as obscure and excluded
pub const DEFAULT_OCCURRENCE_THRESHOLD: f64 = 1e-7;

const WORD_COLUMN: &str = "word";
const OCCURRENCE_COLUMN: &str = "occurrence";

/// Errors that make a word list unusable
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed word list: {0}")]
    Csv(#[from] csv::Error),

    #[error("word list has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("no words with occurrence >= {threshold:e} in word list")]
    Empty { threshold: f64 },
}

/// Where the word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A CSV file on disk
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The set of words accepted as guesses, and the pool targets are drawn from
///
/// Never empty: every constructor fails with `LoadError::Empty` instead.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashMap<[u8; GRID_SIZE], usize>,
}

impl WordBank {
    /// Load a word bank from `source`, keeping words with occurrence >= `threshold`
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read, the header lacks a
    /// required column, or no word survives filtering.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::wordlists::{DEFAULT_OCCURRENCE_THRESHOLD, WordBank, WordSource};
    ///
    /// let bank = WordBank::load(&WordSource::Embedded, DEFAULT_OCCURRENCE_THRESHOLD).unwrap();
    /// assert!(bank.is_valid("crane"));
    /// ```
    pub fn load(source: &WordSource, threshold: f64) -> Result<Self, LoadError> {
        let bank = match source {
            WordSource::Embedded => Self::from_reader(EMBEDDED_WORDS_CSV.as_bytes(), threshold)?,
            WordSource::File(path) => Self::load_from_file(path, threshold)?,
        };

        log::info!(
            "loaded {} words from {source} (threshold {threshold:e})",
            bank.len()
        );
        Ok(bank)
    }

    /// Load a word bank from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be opened, or any error from
    /// [`WordBank::from_reader`].
    pub fn load_from_file<P: AsRef<Path>>(path: P, threshold: f64) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file, threshold)
    }

    /// Parse a CSV word list from any reader
    ///
    /// Rows with a missing or non-numeric occurrence, or a word that is not
    /// five ASCII letters, are skipped. Duplicate words are kept once.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the header cannot be read or lacks a required
    /// column, reading fails with an I/O error, or no word survives filtering.
    pub fn from_reader<R: io::Read>(reader: R, threshold: f64) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let word_col = column_index(&headers, WORD_COLUMN)?;
        let occurrence_col = column_index(&headers, OCCURRENCE_COLUMN)?;

        let mut words = Vec::new();
        let mut index = FxHashMap::default();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    log::debug!("skipping unreadable row: {err}");
                    skipped += 1;
                    continue;
                }
            };

            let Some(occurrence) = record
                .get(occurrence_col)
                .and_then(|value| value.parse::<f64>().ok())
            else {
                log::debug!("skipping row without numeric occurrence: {record:?}");
                skipped += 1;
                continue;
            };

            if occurrence.is_nan() || occurrence < threshold {
                continue;
            }

            let Some(Ok(word)) = record.get(word_col).map(Word::new) else {
                log::debug!("skipping row without a 5-letter word: {record:?}");
                skipped += 1;
                continue;
            };

            if !index.contains_key(word.chars()) {
                index.insert(*word.chars(), words.len());
                words.push(word);
            }
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} malformed rows");
        }

        if words.is_empty() {
            return Err(LoadError::Empty { threshold });
        }

        Ok(Self { words, index })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed bank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Look up the stored word matching `text`, ignoring case
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.index.get(word.chars()).map(|&i| &self.words[i])
    }

    /// Pick a target word uniformly at random
    pub fn pick_random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or(LoadError::MissingColumn(name))
}
