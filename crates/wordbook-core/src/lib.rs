//! Shared word utilities for wordbook.
//!
//! This crate holds the pieces that do not depend on how words are stored:
//!
//! - [`similarity`] -- the single-edit similarity predicate used by
//!   dictionary scans
//! - [`tokenizer`] -- whitespace word tokenizer over any `BufRead` source
//! - [`line_ending`] -- line terminator convention for word sinks

pub mod line_ending;
pub mod similarity;
pub mod tokenizer;

pub use line_ending::{LineEnding, UnknownLineEnding};
pub use similarity::is_similar;
pub use tokenizer::WordTokens;
