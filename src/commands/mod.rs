//! Command vocabulary and dispatch.
//!
//! The command set is a closed enum rather than a string-keyed table: the
//! dispatcher matches exhaustively, so adding a variant without a handler is
//! a compile error instead of a runtime lookup miss. Lookup itself is a
//! case-sensitive exact match on the first whitespace token.

mod reveal;
mod session;

pub use reveal::reveal;
pub use session::{Outcome, Session};

/// The fixed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Echo,
    DarkModeToggle,
    About,
    Projects,
    Contact,
    Joke,
    Credits,
    Social,
    DownloadResume,
    Rate,
    ShowFeedback,
    Cd,
    Ls,
    Clear,
    Exit,
}

impl Command {
    /// Resolve a command token. Case-sensitive, exact match.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "help" => Some(Self::Help),
            "echo" => Some(Self::Echo),
            "dark_mode_toggle" => Some(Self::DarkModeToggle),
            "about" => Some(Self::About),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            "joke" => Some(Self::Joke),
            "credits" => Some(Self::Credits),
            "social" => Some(Self::Social),
            "download_resume" => Some(Self::DownloadResume),
            "rate" => Some(Self::Rate),
            "show_feedback" => Some(Self::ShowFeedback),
            "cd" => Some(Self::Cd),
            "ls" => Some(Self::Ls),
            "clear" => Some(Self::Clear),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Split an input line into a command token and argument tokens.
///
/// Whitespace-delimited; no quoting at this layer (the `rate` handler strips
/// quotes around the project name itself). Returns `None` for blank input.
pub fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}
