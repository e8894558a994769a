// Whitespace word tokenizer over a buffered reader

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the whitespace-separated words of a `BufRead` source.
///
/// Words may be separated by any run of whitespace, including line breaks,
/// so both "one word per line" files and free-form word lists are accepted.
/// The stream ends when the reader is exhausted. A read error (including
/// invalid UTF-8) is yielded once, after which iteration stops.
pub struct WordTokens<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> WordTokens<R> {
    /// Create a tokenizer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Read lines until at least one token is pending or input is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.done = true;
                return Ok(());
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for WordTokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.pop_front() {
            return Some(Ok(word));
        }
        if self.done {
            return None;
        }
        if let Err(e) = self.fill() {
            self.done = true;
            return Some(Err(e));
        }
        self.pending.pop_front().map(Ok)
    }
}
