// Initial content for a new dictionary

use std::path::PathBuf;

/// Where a new [`Dictionary`](crate::Dictionary) takes its initial words
/// from. Used with [`Dictionary::create`](crate::Dictionary::create).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// Start with no words.
    #[default]
    Empty,
    /// Start with exactly one word.
    SingleWord(String),
    /// Bulk-load a whitespace-separated word list file. Repeated tokens are
    /// skipped.
    WordList(PathBuf),
}

impl From<PathBuf> for DictionarySource {
    fn from(path: PathBuf) -> Self {
        DictionarySource::WordList(path)
    }
}
