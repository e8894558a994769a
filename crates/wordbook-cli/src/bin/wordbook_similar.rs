// wordbook-similar: Print dictionary words similar to each query word.
//
// Reads query words from the arguments, or from stdin (one per line) when
// no arguments are given. Output format:
//   query: match1 match2 ...
//   query: (no similar words)
//
// Usage:
//   wordbook-similar [-d WORDS_FILE] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordbook::{Dictionary, DictionaryError};
use wordbook_cli::{CommonArgs, fatal, init_logging, load_dictionary};

/// Print words that differ from each query by at most one edit.
#[derive(Parser, Debug)]
#[command(name = "wordbook-similar", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Query words (read from stdin if omitted)
    words: Vec<String>,
}

fn print_similar(word: &str, dictionary: &Dictionary, out: &mut impl Write) -> io::Result<()> {
    match dictionary.find_similar(word) {
        Ok(similar) if similar.is_empty() => writeln!(out, "{word}: (no similar words)"),
        Ok(similar) => writeln!(out, "{word}: {}", similar.join(" ")),
        Err(DictionaryError::EmptyCollection) => fatal("dictionary is empty"),
        Err(e) => fatal(&e.to_string()),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.common.verbosity());

    let (_, dictionary) =
        load_dictionary(args.common.dict_path.as_deref()).unwrap_or_else(|e| fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if args.words.is_empty() {
        let stdin = io::stdin();
        stdin
            .lock()
            .lines()
            .map(|line| {
                let line = line.unwrap_or_else(|e| fatal(&format!("error reading stdin: {e}")));
                let word = line.trim();
                if word.is_empty() {
                    Ok(())
                } else {
                    print_similar(word, &dictionary, &mut out)
                }
            })
            .collect::<io::Result<()>>()
    } else {
        args.words
            .iter()
            .try_for_each(|word| print_similar(word, &dictionary, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        fatal(&format!("error writing output: {e}"));
    }
}
