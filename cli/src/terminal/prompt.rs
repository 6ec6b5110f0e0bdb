use std::io::{self, BufRead};

use anyhow::Context;
use colored::*;
use console::Term;

use crate::terminal::colors;

/// Line-oriented questions to the user.
///
/// The label goes to the terminal without a line break; the answer is read from
/// `input` and trimmed.
pub struct Prompt<R> {
    input: R,
    term: Term,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            term: Term::stdout(),
        }
    }

    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let label: ColoredString = format!("{label}:").color(colors::PRIMARY);
        self.term.write_str(&format!("{label} "))?;

        let mut line: String = String::new();
        let read: usize = self
            .input
            .read_line(&mut line)
            .context("failed to read from standard input")?;

        if read == 0 {
            self.term.write_line("")?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }

    /// Like [`Prompt::ask`], but a closed input is an error.
    pub fn require(&mut self, label: &str) -> anyhow::Result<String> {
        self.ask(label)?
            .with_context(|| format!("input closed while asking for '{label}'"))
    }
}

/// Whether `err` comes from a line that was not valid UTF-8.
///
/// Such a line has already been consumed, so the caller can simply ask again.
pub fn is_unreadable_line(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::InvalidData)
}
