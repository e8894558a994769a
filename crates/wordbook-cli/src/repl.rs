// Interactive command loop
//
// Reads commands and words line by line from any `BufRead` and writes
// prompts and results to any `Write`, so the whole session can be driven
// from tests. Every dictionary error kind gets its own message.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{info, warn};
use wordbook::{Dictionary, DictionaryError};

const COMMAND_PROMPT: &str = "Enter command> ";
const WORD_PROMPT: &str = "Enter the word> ";
const SAVE_PROMPT: &str = "Save changes before exiting? (Yes/No) ";

const MENU: &str = "
           ** Dictionary Application Menu **
 -----------------------------------------------------
|  [find]   - Find a specific word in the dictionary  |
|  [add]    - Add a word to the dictionary            |
|  [remove] - Remove a word from the dictionary       |
|  [search] - Search for similar words                |
|  [exit]   - Exit the application                    |
|  [menu]   - Display this menu again                 |
 -----------------------------------------------------";

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Find,
    Add,
    Remove,
    Search,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a command line; surrounding whitespace and case are ignored.
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_lowercase();
        match command.as_str() {
            "menu" => Command::Menu,
            "find" => Command::Find,
            "add" => Command::Add,
            "remove" => Command::Remove,
            "search" => Command::Search,
            "exit" => Command::Exit,
            _ => Command::Unknown(command),
        }
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit`, answered `Yes`, and the save succeeded.
    Saved,
    /// `exit`, answered `Yes`, but the save failed.
    SaveFailed,
    /// `exit` without saving.
    Discarded,
    /// Input ran out before `exit`.
    EndOfInput,
}

/// Interactive session over a dictionary.
pub struct Repl<'a, R, W> {
    dictionary: &'a mut Dictionary,
    save_path: &'a Path,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    /// Create a session that saves to `save_path` on a confirmed exit.
    pub fn new(dictionary: &'a mut Dictionary, save_path: &'a Path, input: R, output: W) -> Self {
        Self {
            dictionary,
            save_path,
            input,
            output,
        }
    }

    /// Run commands until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                return Ok(SessionEnd::EndOfInput);
            };
            let command = Command::parse(&line);
            if command == Command::Exit {
                return self.exit();
            }
            if !self.execute(command)? {
                return Ok(SessionEnd::EndOfInput);
            }
        }
    }

    /// Execute one non-exit command. Returns `false` if input ran out while
    /// reading the command's word.
    fn execute(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Menu => {
                writeln!(self.output, "{MENU}")?;
            }
            Command::Find => {
                let Some(word) = self.prompt(WORD_PROMPT)? else {
                    return Ok(false);
                };
                let message = if self.dictionary.find_word(&word) {
                    "Word found."
                } else {
                    "Word not found."
                };
                writeln!(self.output, "{message}")?;
            }
            Command::Add => {
                let Some(word) = self.prompt(WORD_PROMPT)? else {
                    return Ok(false);
                };
                match self.dictionary.add_word(&word) {
                    Ok(()) => writeln!(self.output, "Word added successfully.")?,
                    Err(e) => self.report(&e)?,
                }
            }
            Command::Remove => {
                let Some(word) = self.prompt(WORD_PROMPT)? else {
                    return Ok(false);
                };
                match self.dictionary.delete_word(&word) {
                    Ok(()) => writeln!(self.output, "Word removed successfully.")?,
                    Err(e) => self.report(&e)?,
                }
            }
            Command::Search => {
                let Some(word) = self.prompt(WORD_PROMPT)? else {
                    return Ok(false);
                };
                match self.dictionary.find_similar(&word) {
                    Ok(similar) if similar.is_empty() => {
                        writeln!(self.output, "No similar words found.")?;
                    }
                    Ok(similar) => writeln!(self.output, "{}", similar.join(" "))?,
                    Err(e) => self.report(&e)?,
                }
            }
            Command::Exit => {}
            Command::Unknown(other) => {
                warn!("unknown command {other:?}");
                writeln!(
                    self.output,
                    "Invalid command. Type 'menu' to see available commands."
                )?;
            }
        }
        Ok(true)
    }

    fn exit(&mut self) -> io::Result<SessionEnd> {
        let answer = self.prompt(SAVE_PROMPT)?;
        if answer.as_deref().map(str::trim) != Some("Yes") {
            return Ok(SessionEnd::Discarded);
        }
        match self.dictionary.save(self.save_path) {
            Ok(()) => {
                info!("saved session to {}", self.save_path.display());
                writeln!(self.output, "Changes saved successfully.")?;
                Ok(SessionEnd::Saved)
            }
            Err(e) => {
                writeln!(self.output, "Failed to save changes: {e}")?;
                Ok(SessionEnd::SaveFailed)
            }
        }
    }

    /// Print a message for a dictionary error. Each kind is reported
    /// separately.
    fn report(&mut self, error: &DictionaryError) -> io::Result<()> {
        match error {
            DictionaryError::AlreadyExists(_) => {
                writeln!(self.output, "Exception: Word already exists.")
            }
            DictionaryError::NotFound(_) => writeln!(self.output, "Exception: Word not found."),
            DictionaryError::EmptyCollection => {
                writeln!(self.output, "Exception: Dictionary is empty.")
            }
            DictionaryError::SourceUnavailable { .. } | DictionaryError::SinkUnavailable { .. } => {
                writeln!(self.output, "An error occurred: {error}")
            }
        }
    }

    /// Print `text`, then read one line without its terminator. Returns
    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Run an interactive session; see [`Repl`].
pub fn run<R: BufRead, W: Write>(
    dictionary: &mut Dictionary,
    save_path: &Path,
    input: R,
    output: W,
) -> io::Result<SessionEnd> {
    Repl::new(dictionary, save_path, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(dictionary: &mut Dictionary, save_path: &Path, script: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = run(dictionary, save_path, script.as_bytes(), &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    fn dict(words: &str) -> Dictionary {
        Dictionary::from_reader(words.as_bytes()).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  FIND \n"), Command::Find);
        assert_eq!(Command::parse("Search"), Command::Search);
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("menu"), Command::Menu);
        assert_eq!(Command::parse("Remove"), Command::Remove);
        assert_eq!(Command::parse("add"), Command::Add);
        assert_eq!(Command::parse("Fly"), Command::Unknown("fly".to_string()));
    }

    #[test]
    fn find_add_remove_search() {
        let mut d = dict("bat cat hat");
        let path = Path::new("unused.txt");
        let script = "find\ncat\nadd\ncot\nsearch\ncat\nremove\ncat\nfind\ncat\n";
        let (end, out) = session(&mut d, path, script);

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("Word found."));
        assert!(out.contains("Word added successfully."));
        assert!(out.contains("bat cot hat\n"));
        assert!(out.contains("Word removed successfully."));
        assert!(out.contains("Word not found."));
        assert_eq!(d.words().collect::<Vec<_>>(), vec!["bat", "cot", "hat"]);
    }

    #[test]
    fn each_error_has_its_own_message() {
        let mut d = Dictionary::new();
        let path = Path::new("unused.txt");
        let script = "search\ncat\nremove\ncat\nadd\ncat\nadd\ncat\n";
        let (_, out) = session(&mut d, path, script);

        assert!(out.contains("Exception: Dictionary is empty."));
        assert!(out.contains("Exception: Word not found."));
        assert!(out.contains("Exception: Word already exists."));
    }

    #[test]
    fn search_without_matches() {
        let mut d = dict("dog");
        let (_, out) = session(&mut d, Path::new("unused.txt"), "search\ncat\n");
        assert!(out.contains("No similar words found."));
    }

    #[test]
    fn unknown_command_and_menu() {
        let mut d = dict("dog");
        let (_, out) = session(&mut d, Path::new("unused.txt"), "dance\nMENU\n");
        assert!(out.contains("Invalid command. Type 'menu' to see available commands."));
        assert!(out.contains("[search] - Search for similar words"));
    }

    #[test]
    fn words_keep_inner_text_but_lose_line_terminator() {
        let mut d = Dictionary::new();
        let (_, out) = session(&mut d, Path::new("unused.txt"), "add\r\nice cream\r\n");
        assert!(out.contains("Word added successfully."));
        assert!(d.find_word("ice cream"));
    }

    #[test]
    fn exit_with_yes_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut d = dict("cat bat");
        let (end, out) = session(&mut d, &path, "add\nhat\nexit\nYes\nfind\n");

        assert_eq!(end, SessionEnd::Saved);
        assert!(out.ends_with("Changes saved successfully.\n"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bat\ncat\nhat\n");
    }

    #[test]
    fn exit_with_anything_else_discards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut d = dict("cat");
        for answer in ["No", "yes", "", "YES"] {
            let script = format!("exit\n{answer}\n");
            let (end, _) = session(&mut d, &path, &script);
            assert_eq!(end, SessionEnd::Discarded, "answer {answer:?}");
        }
        assert!(!path.exists());
    }

    #[test]
    fn exit_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("words.txt");
        let mut d = dict("cat");
        let (end, out) = session(&mut d, &path, "exit\nYes\n");
        assert_eq!(end, SessionEnd::SaveFailed);
        assert!(out.contains("Failed to save changes: could not save dictionary to"));
    }

    #[test]
    fn end_of_input_while_reading_word() {
        let mut d = dict("cat");
        let (end, out) = session(&mut d, Path::new("unused.txt"), "add\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.ends_with(WORD_PROMPT));
    }
}
