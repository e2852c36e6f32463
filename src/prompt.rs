//! Interactive category selection
//!
//! Used only when `--category` was not given on the command line.

use crate::domain::CategoryFilter;
use crate::error::ConfigError;
use clap::ValueEnum;
use std::io::{BufRead, Write};

const OPTIONS: [(&str, CategoryFilter); 4] = [
    ("direct main", CategoryFilter::DirectMain),
    ("direct dev", CategoryFilter::DirectDev),
    ("transitive", CategoryFilter::Transitive),
    ("all", CategoryFilter::All),
];

/// Parse an answer: a 1-based option number or a category name
pub fn parse_selection(answer: &str) -> Result<CategoryFilter, ConfigError> {
    let answer = answer.trim();

    if let Ok(index) = answer.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| OPTIONS.get(i))
            .map(|(_, filter)| *filter)
            .ok_or_else(|| ConfigError::invalid_category(answer));
    }

    if let Some((_, filter)) = OPTIONS.iter().find(|(label, _)| *label == answer) {
        return Ok(*filter);
    }

    CategoryFilter::from_str(answer, false).map_err(|_| ConfigError::invalid_category(answer))
}

/// Ask which categories to check and read one answer line
pub fn prompt_category<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<CategoryFilter, ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::PromptIo { source };

    writeln!(output, "Which dependencies should be checked?").map_err(io_err)?;
    for (i, (label, _)) in OPTIONS.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, label).map_err(io_err)?;
    }
    write!(output, "Select [1-{}]: ", OPTIONS.len()).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(io_err)?;
    if read == 0 {
        return Err(ConfigError::invalid_category(""));
    }

    parse_selection(&answer)
}
