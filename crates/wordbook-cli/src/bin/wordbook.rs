// wordbook: Interactive word dictionary.
//
// Loads a word list, then reads commands from stdin: find, add, remove,
// search (similar words), menu and exit. On exit the user may save the
// dictionary back to the file it was loaded from.
//
// Usage:
//   wordbook [-d WORDS_FILE] [--line-ending lf|crlf] [-v] [-q]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use wordbook::{Dictionary, LineEnding};
use wordbook_cli::repl::{self, SessionEnd};
use wordbook_cli::{CommonArgs, fatal, init_logging, resolve_dict_path, strip_quotes};

/// Interactive word dictionary with similar-word search.
#[derive(Parser, Debug)]
#[command(name = "wordbook", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Line ending used when saving (lf or crlf)
    #[arg(long, default_value_t = LineEnding::Lf)]
    line_ending: LineEnding,
}

fn main() {
    let args = Args::parse();
    init_logging(args.common.verbosity());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let path = match resolve_dict_path(args.common.dict_path.as_deref()) {
        Some(path) => path,
        None => ask_filename(&mut input, &mut out),
    };

    let mut dictionary = match Dictionary::from_path(&path) {
        Ok(dictionary) => {
            let _ = writeln!(out, "Dictionary loaded successfully.");
            dictionary
        }
        Err(e) => {
            let _ = writeln!(out, "Failed to load dictionary: {e}");
            process::exit(1);
        }
    };
    dictionary.set_line_ending(args.line_ending);

    match repl::run(&mut dictionary, &path, input, &mut out) {
        Ok(SessionEnd::SaveFailed) => process::exit(1),
        Ok(_) => {}
        Err(e) => fatal(&format!("terminal I/O failed: {e}")),
    }
}

/// Prompt for the word list file name on the terminal.
fn ask_filename<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> PathBuf {
    let _ = write!(out, "Enter filename> ");
    let _ = out.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => fatal("no file name given"),
        Ok(_) => PathBuf::from(strip_quotes(&line)),
        Err(e) => fatal(&format!("error reading stdin: {e}")),
    }
}
