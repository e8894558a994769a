//! Word dictionary backed by a height-balanced ordered set.
//!
//! A [`Dictionary`] owns one [`AvlSet`](wordbook_avl::AvlSet) of words and
//! layers the word-level API on top of it: duplicate-checked insertion,
//! absence-checked deletion, membership queries, single-edit similarity
//! search, and line-oriented loading and saving.
//!
//! - [`dictionary`] -- the `Dictionary` type and its error enum
//! - [`source`] -- initial content for `Dictionary::create`
//!
//! ```
//! use wordbook::{Dictionary, DictionaryError};
//!
//! let mut dict = Dictionary::from_reader("bat cat hat".as_bytes())?;
//! assert_eq!(dict.find_similar("cat")?, ["bat", "hat"]);
//!
//! dict.add_word("cot")?;
//! assert_eq!(dict.find_similar("cat")?, ["bat", "cot", "hat"]);
//! assert!(matches!(dict.add_word("cot"), Err(DictionaryError::AlreadyExists(_))));
//! # Ok::<(), DictionaryError>(())
//! ```

pub mod dictionary;
pub mod source;

pub use dictionary::{Dictionary, DictionaryError};
pub use source::DictionarySource;
pub use wordbook_core::{LineEnding, is_similar};
