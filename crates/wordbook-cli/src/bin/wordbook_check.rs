// wordbook-check: Check words from stdin against the dictionary.
//
// Reads words from stdin (one per line) and reports whether each word is
// in the dictionary:
//   C: word    (present)
//   W: word    (absent)
//
// Usage:
//   wordbook-check [-d WORDS_FILE] [-s]
//
// Options:
//   -s, --suggest   Also print similar dictionary words for absent words

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordbook_cli::{CommonArgs, fatal, init_logging, load_dictionary};

/// Check words from stdin against the dictionary.
#[derive(Parser, Debug)]
#[command(name = "wordbook-check", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Also print similar dictionary words for absent words
    #[arg(short, long)]
    suggest: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.common.verbosity());

    let (_, dictionary) =
        load_dictionary(args.common.dict_path.as_deref()).unwrap_or_else(|e| fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if dictionary.find_word(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if args.suggest {
                // An empty dictionary simply has nothing to suggest.
                for suggestion in dictionary.find_similar(word).unwrap_or_default() {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
