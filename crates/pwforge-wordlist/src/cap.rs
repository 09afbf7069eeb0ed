// Size capping and the final sorted wordlist

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::WordlistError;

/// Default maximum number of words in a generated wordlist.
pub const DEFAULT_MAX_SIZE: usize = 5000;

/// Collects words one at a time, holding at most `max_size` of them.
///
/// Only the lexicographically smallest `max_size` distinct words offered so
/// far are retained, so memory stays proportional to the cap no matter how
/// many words pass through. The finished [`Wordlist`] is the same as sorting
/// and deduplicating everything offered, then truncating.
#[derive(Debug, Clone, Default)]
pub struct WordlistBuilder {
    words: BTreeSet<String>,
    max_size: Option<usize>,
    offered: usize,
    truncated: bool,
}

impl WordlistBuilder {
    pub fn new(max_size: Option<usize>) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Offer one word.
    pub fn insert(&mut self, word: String) {
        self.offered += 1;
        let Some(max) = self.max_size else {
            self.words.insert(word);
            return;
        };
        if self.words.len() < max {
            self.words.insert(word);
            return;
        }

        let below_last = self.words.last().is_some_and(|last| word < *last);
        if !below_last {
            if !self.words.contains(&word) {
                self.truncated = true;
            }
            return;
        }
        if self.words.insert(word) {
            self.words.pop_last();
            self.truncated = true;
        }
    }

    /// Number of words offered, duplicates included.
    pub fn offered(&self) -> usize {
        self.offered
    }

    /// Whether any distinct word has been dropped by the cap.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn finish(self) -> Wordlist {
        debug!(
            offered = self.offered,
            output = self.words.len(),
            max_size = ?self.max_size,
            truncated = self.truncated,
            "capped wordlist"
        );
        Wordlist {
            words: self.words.into_iter().collect(),
        }
    }
}

impl Extend<String> for WordlistBuilder {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// A finished wordlist: unique words in ascending code-point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Sort and deduplicate `words`, keeping at most `max_size` of them.
    ///
    /// When there are more than `max_size` words, the lexicographically
    /// smallest `max_size` are kept. `None` keeps everything.
    pub fn capped<I>(words: I, max_size: Option<usize>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut builder = WordlistBuilder::new(max_size);
        builder.extend(words);
        builder.finish()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Write one word per line, each followed by `\n`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for word in &self.words {
            out.write_all(word.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    /// Write the wordlist to `path`, creating or truncating the file.
    pub fn save(&self, path: &Path) -> Result<(), WordlistError> {
        let wrap = |source| WordlistError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        self.write_to(BufWriter::new(file)).map_err(wrap)?;
        debug!(path = %path.display(), words = self.words.len(), "saved wordlist");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
