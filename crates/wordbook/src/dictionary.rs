// Dictionary: word-level API over the AVL ordered set
//
// The dictionary owns one `AvlSet<String>` and is the only layer that knows
// about "already exists" and "not found". The tree's insert and remove are
// only ever called after the matching `contains` check.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, trace};
use wordbook_avl::AvlSet;
use wordbook_core::{LineEnding, WordTokens, is_similar};

use crate::source::DictionarySource;

/// Label used in error messages when loading from an arbitrary reader.
const READER_LABEL: &str = "<reader>";

/// Label used in error messages when saving to an arbitrary writer.
const WRITER_LABEL: &str = "<writer>";

/// Errors reported by [`Dictionary`] operations.
///
/// Each condition has its own variant so callers can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word is already in the dictionary.
    #[error("word already exists: {0}")]
    AlreadyExists(String),

    /// The word is not in the dictionary.
    #[error("word not found: {0}")]
    NotFound(String),

    /// A similarity search was run against an empty dictionary.
    #[error("dictionary is empty")]
    EmptyCollection,

    /// The word list could not be opened or read.
    #[error("could not load dictionary from {origin}: {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The destination could not be written.
    #[error("could not save dictionary to {destination}: {source}")]
    SinkUnavailable {
        destination: String,
        #[source]
        source: io::Error,
    },
}

/// A set of unique words with membership, similarity search and
/// persistence.
///
/// Words are ordered by plain `str` comparison (byte order of the UTF-8
/// encoding, which equals code point order). There is no case folding.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AvlSet<String>,
    /// Line terminator used by `save` and `save_to`.
    line_ending: LineEnding,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary holding exactly `word`.
    pub fn with_word(word: impl Into<String>) -> Self {
        let mut dictionary = Self::new();
        dictionary.words.insert(word.into());
        dictionary
    }

    /// Create a dictionary from the given source.
    pub fn create(source: DictionarySource) -> Result<Self, DictionaryError> {
        match source {
            DictionarySource::Empty => Ok(Self::new()),
            DictionarySource::SingleWord(word) => Ok(Self::with_word(word)),
            DictionarySource::WordList(path) => Self::from_path(path),
        }
    }

    /// Bulk-load a dictionary from a whitespace-separated word list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        dictionary.load_words(reader)?;
        Ok(dictionary)
    }

    /// Bulk-load a dictionary from a word list file.
    ///
    /// Fails with [`DictionaryError::SourceUnavailable`] if the file cannot
    /// be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::SourceUnavailable {
            origin: path.display().to_string(),
            source,
        })?;
        let mut dictionary = Self::new();
        dictionary.load_tokens(BufReader::new(file), &path.display().to_string())?;
        Ok(dictionary)
    }

    /// Insert every token of `reader` that is not already present.
    ///
    /// Returns the number of words actually inserted. Repeated tokens, and
    /// tokens already in the dictionary, are skipped silently.
    pub fn load_words<R: BufRead>(&mut self, reader: R) -> Result<usize, DictionaryError> {
        self.load_tokens(reader, READER_LABEL)
    }

    fn load_tokens<R: BufRead>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> Result<usize, DictionaryError> {
        let mut inserted = 0usize;
        let mut skipped = 0usize;
        for token in WordTokens::new(reader) {
            let word = token.map_err(|source| DictionaryError::SourceUnavailable {
                origin: origin.to_string(),
                source,
            })?;
            if self.words.contains(word.as_str()) {
                skipped += 1;
                continue;
            }
            self.words.insert(word);
            inserted += 1;
        }
        debug!("{origin}: {skipped} duplicate tokens skipped");
        info!(
            "loaded {inserted} words from {origin} ({} total, tree height {})",
            self.words.len(),
            self.words.height()
        );
        Ok(inserted)
    }

    // =========================================================================
    // Word operations
    // =========================================================================

    /// Add a word.
    ///
    /// Fails with [`DictionaryError::AlreadyExists`] if the word is present;
    /// the dictionary is unchanged in that case.
    pub fn add_word(&mut self, word: &str) -> Result<(), DictionaryError> {
        if self.words.contains(word) {
            return Err(DictionaryError::AlreadyExists(word.to_string()));
        }
        self.words.insert(word.to_string());
        trace!("added {word:?}");
        Ok(())
    }

    /// Returns `true` if the word is in the dictionary.
    pub fn find_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Delete a word.
    ///
    /// Fails with [`DictionaryError::NotFound`] if the word is absent.
    pub fn delete_word(&mut self, word: &str) -> Result<(), DictionaryError> {
        if !self.words.contains(word) {
            return Err(DictionaryError::NotFound(word.to_string()));
        }
        self.words.remove(word);
        trace!("deleted {word:?}");
        Ok(())
    }

    /// Find every stored word similar to `word`, in ascending order.
    ///
    /// Each stored word is tested with `is_similar(word, candidate)`. The
    /// result may be empty. Fails with [`DictionaryError::EmptyCollection`]
    /// if the dictionary holds no words.
    pub fn find_similar(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        if self.words.is_empty() {
            return Err(DictionaryError::EmptyCollection);
        }
        let matches: Vec<String> = self
            .words
            .iter()
            .filter(|candidate| is_similar(word, candidate))
            .cloned()
            .collect();
        debug!(
            "{} of {} words similar to {word:?}",
            matches.len(),
            self.words.len()
        );
        Ok(matches)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every word, ascending, one per line, to the file at `path`.
    ///
    /// The file is created if missing and truncated otherwise. Fails with
    /// [`DictionaryError::SinkUnavailable`] if it cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let destination = path.display().to_string();
        let sink_error = |source: io::Error| DictionaryError::SinkUnavailable {
            destination: destination.clone(),
            source,
        };

        let file = File::create(path).map_err(sink_error)?;
        let mut writer = BufWriter::new(file);
        self.write_words(&mut writer).map_err(sink_error)?;
        writer.flush().map_err(sink_error)?;
        info!("saved {} words to {destination}", self.words.len());
        Ok(())
    }

    /// Write every word, ascending, one per line, to `writer`.
    pub fn save_to<W: Write>(&self, mut writer: W) -> Result<(), DictionaryError> {
        let sink_error = |source: io::Error| DictionaryError::SinkUnavailable {
            destination: WRITER_LABEL.to_string(),
            source,
        };
        self.write_words(&mut writer).map_err(sink_error)?;
        writer.flush().map_err(sink_error)
    }

    fn write_words<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let terminator = self.line_ending.as_str();
        for word in &self.words {
            writer.write_all(word.as_bytes())?;
            writer.write_all(terminator.as_bytes())?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors and options
    // =========================================================================

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// The line terminator used when saving.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Set the line terminator used when saving.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }
}
