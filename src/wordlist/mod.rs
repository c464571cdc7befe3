//! Word-list loading.
//!
//! Reads newline-separated words from a file or any [`BufRead`] and adds them
//! to a [`Dictionary`]. Line handling (trimming, comments, length limit) is
//! driven by [`DictionaryConfig`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::Dictionary;
use crate::error::wordlist::WordListError;

/// Result type for word-list operations.
pub type WordListResult<T> = Result<T, WordListError>;

/// Counters collected while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read from the source
    pub lines_read: usize,
    /// Words newly added to the dictionary
    pub added: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Blank, comment or rejected lines
    pub skipped: usize,
}

/// Loads word lists into a dictionary.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    config: DictionaryConfig,
}

impl WordListLoader {
    /// Creates a loader with the given line handling.
    pub fn new(config: DictionaryConfig) -> Self {
        Self { config }
    }

    /// Loads the file at `path` into `dictionary`.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - Counters for the load.
    /// * `Err(WordListError)` - If the file is missing, unreadable, or holds an
    ///   overlong word or a line that is not UTF-8 while `skip_invalid` is off.
    pub fn load_path<D, P>(&self, path: P, dictionary: &mut D) -> WordListResult<LoadReport>
    where
        D: Dictionary + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WordListError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let report = self.load_reader(BufReader::new(file), dictionary)?;
        info!(
            path = %path.display(),
            added = report.added,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "word list loaded"
        );
        Ok(report)
    }

    /// Loads every line of `reader` into `dictionary`.
    ///
    /// Lines are decoded one at a time, so a line that is not valid UTF-8 is
    /// skipped (or rejected when `skip_invalid` is off) without losing the
    /// rest of the input.
    pub fn load_reader<D, R>(&self, mut reader: R, dictionary: &mut D) -> WordListResult<LoadReport>
    where
        D: Dictionary + ?Sized,
        R: BufRead,
    {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.lines_read += 1;
            let line_number = report.lines_read;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) if self.config.skip_invalid => {
                    warn!(line = line_number, "skipping line that is not valid UTF-8");
                    report.skipped += 1;
                    continue;
                }
                Err(_) => return Err(WordListError::InvalidUtf8 { line: line_number }),
            };

            let word = match self.extract_word(line, line_number)? {
                Some(word) => word,
                None => {
                    report.skipped += 1;
                    continue;
                }
            };

            if dictionary.add_word(word) {
                report.added += 1;
            } else {
                report.duplicates += 1;
            }
        }

        debug!(?report, "word list read");
        Ok(report)
    }

    /// Turns one line into a word, or `None` when the line is to be skipped.
    fn extract_word<'a>(&self, line: &'a str, line_number: usize) -> WordListResult<Option<&'a str>> {
        let word = if self.config.trim_whitespace {
            line.trim()
        } else {
            line.trim_end_matches(['\r', '\n'])
        };

        if word.is_empty() {
            return Ok(None);
        }

        if let Some(prefix) = &self.config.comment_prefix {
            if word.starts_with(prefix.as_str()) {
                return Ok(None);
            }
        }

        let length = word.chars().count();
        if length > self.config.max_word_length {
            if self.config.skip_invalid {
                warn!(
                    line = line_number,
                    length,
                    max = self.config.max_word_length,
                    "skipping overlong word"
                );
                return Ok(None);
            }
            return Err(WordListError::WordTooLong {
                line: line_number,
                length,
                max: self.config.max_word_length,
            });
        }

        Ok(Some(word))
    }
}

impl Default for WordListLoader {
    fn default() -> Self {
        Self::new(DictionaryConfig::default())
    }
}
