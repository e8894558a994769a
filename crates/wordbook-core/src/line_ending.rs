// Line terminator convention for word sinks

use std::fmt;
use std::str::FromStr;

/// Line terminator written after each word when saving a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Lf => "lf",
            LineEnding::CrLf => "crlf",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unrecognized line ending name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line ending {0:?} (expected \"lf\" or \"crlf\")")]
pub struct UnknownLineEnding(pub String);

impl FromStr for LineEnding {
    type Err = UnknownLineEnding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "dos" | "windows" => Ok(LineEnding::CrLf),
            _ => Err(UnknownLineEnding(s.to_string())),
        }
    }
}
