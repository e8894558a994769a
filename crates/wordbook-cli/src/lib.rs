// wordbook-cli: shared utilities for the command-line tools.

pub mod repl;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use log::{LevelFilter, debug};
use wordbook::Dictionary;

/// Default word list file name.
pub const WORDS_FILE: &str = "words.txt";

/// Per-user directory (under `$HOME`) searched for the word list.
const USER_DIR: &str = ".wordbook";

/// Options shared by every wordbook binary.
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Word list file (one word per line)
    #[arg(short = 'd', long = "dict-path", env = "WORDBOOK_DICT_PATH")]
    pub dict_path: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Effective verbosity: 0 quiet, 1 default, 2+ more detail.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Install the stderr logger. `RUST_LOG`, when set, overrides `verbosity`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

/// Build the list of word list files to try.
///
/// Search order:
/// 1. `dict_path` (from `-d` or `WORDBOOK_DICT_PATH`), used alone if given
/// 2. `~/.wordbook/words.txt`
/// 3. `words.txt` in the current working directory
pub fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    if let Some(p) = dict_path {
        return vec![p.to_path_buf()];
    }

    let mut paths = Vec::new();
    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR).join(WORDS_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }
    paths
}

/// Pick the word list file: the explicit path if given, otherwise the first
/// existing file from [`build_search_paths`].
pub fn resolve_dict_path(dict_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = dict_path {
        return Some(p.to_path_buf());
    }
    let found = build_search_paths(None).into_iter().find(|p| p.is_file());
    debug!("word list lookup: {found:?}");
    found
}

/// Locate and load the word list.
///
/// Returns the path that was loaded together with the dictionary, or a
/// message describing what went wrong.
pub fn load_dictionary(dict_path: Option<&Path>) -> Result<(PathBuf, Dictionary), String> {
    let Some(path) = resolve_dict_path(dict_path) else {
        return Err(format!(
            "could not find {} in any of the search paths:\n{}",
            WORDS_FILE,
            build_search_paths(None)
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };
    let dictionary = Dictionary::from_path(&path).map_err(|e| e.to_string())?;
    Ok((path, dictionary))
}

/// Strip one pair of surrounding double quotes from a typed file name.
pub fn strip_quotes(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_removes_one_pair() {
        assert_eq!(strip_quotes("\"my words.txt\""), "my words.txt");
        assert_eq!(strip_quotes("  \"a.txt\"  "), "a.txt");
        assert_eq!(strip_quotes("plain.txt"), "plain.txt");
        assert_eq!(strip_quotes("\"unbalanced.txt"), "\"unbalanced.txt");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn explicit_path_is_used_alone() {
        let explicit = Path::new("/tmp/custom.txt");
        assert_eq!(build_search_paths(Some(explicit)), vec![explicit.to_path_buf()]);
        assert_eq!(resolve_dict_path(Some(explicit)), Some(explicit.to_path_buf()));
    }

    #[test]
    fn default_search_ends_with_cwd() {
        let paths = build_search_paths(None);
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(paths.last(), Some(&cwd.join(WORDS_FILE)));
    }

    #[test]
    fn load_dictionary_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "cat\nbat\n").unwrap();

        let (loaded, dict) = load_dictionary(Some(path.as_path())).unwrap();
        assert_eq!(loaded, path);
        assert_eq!(dict.words().collect::<Vec<_>>(), vec!["bat", "cat"]);
    }

    #[test]
    fn load_dictionary_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = load_dictionary(Some(path.as_path())).unwrap_err();
        assert!(err.contains("could not load dictionary"), "{err}");
    }

    #[test]
    fn verbosity_levels() {
        let mut args = CommonArgs {
            dict_path: None,
            verbose: 0,
            quiet: false,
        };
        assert_eq!(args.verbosity(), 1);
        args.verbose = 2;
        assert_eq!(args.verbosity(), 3);
        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }
}
