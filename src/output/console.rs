//! Color-coded status lines for the terminal
//!
//! Info and success lines go to stdout, warnings and errors to stderr.

use colored::Colorize;
use std::fmt::Display;

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Status::Info => "info",
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }

    /// Whether this status is printed to stderr
    pub fn is_stderr(&self) -> bool {
        matches!(self, Status::Warning | Status::Error)
    }
}

/// Render a status line, with or without ANSI colors
pub fn render(status: Status, message: impl Display, color: bool) -> String {
    let label = format!("{}:", status.label());
    if !color {
        return format!("{} {}", label, message);
    }

    let label = match status {
        Status::Info => label.cyan(),
        Status::Success => label.green().bold(),
        Status::Warning => label.yellow().bold(),
        Status::Error => label.red().bold(),
    };
    format!("{} {}", label, message)
}

/// Print a status line to the stream matching its severity
pub fn print(status: Status, message: impl Display) {
    let line = render(status, message, true);
    if status.is_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info(message: impl Display) {
    print(Status::Info, message);
}

pub fn success(message: impl Display) {
    print(Status::Success, message);
}

pub fn warning(message: impl Display) {
    print(Status::Warning, message);
}

pub fn error(message: impl Display) {
    print(Status::Error, message);
}
