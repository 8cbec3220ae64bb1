// src/infrastructure/terminal.rs
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::application::{Confirmer, Notifier};
use crate::domain::NotifyKind;

/// Prints outcomes: successes to stdout, errors to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    last: Option<NotifyKind>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// True when the most recent notification was an error
    pub fn failed(&self) -> bool {
        self.last == Some(NotifyKind::Error)
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NotifyKind, message: &str) {
        self.last = Some(kind);
        match kind {
            NotifyKind::Success => println!("{message}"),
            NotifyKind::Error => eprintln!("Error: {message}"),
        }
    }
}

/// Asks on the terminal, or answers yes without asking when `assume_yes` is set
#[derive(Debug)]
pub struct PromptConfirmer {
    assume_yes: bool,
}

impl PromptConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for PromptConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = io::stdin();
        ask(prompt, stdin.lock(), io::stderr()).unwrap_or_else(|e| {
            warn!(error = %e, "Could not read confirmation, treating as no");
            false
        })
    }
}

/// Only `y`/`yes` (any case) confirms; end of input declines
pub fn ask(prompt: &str, mut input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
