//! pubspec.lock reading
//!
//! This module provides:
//! - Existence checking for the lockfile
//! - A lazy record iterator per dependency category

mod parser;

pub use parser::{is_valid_package_name, LineKind, LockfileParser, ParseState};

use crate::domain::Category;
use crate::error::LockfileError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fail early if the lockfile is missing
pub fn ensure_exists(path: &Path) -> Result<(), LockfileError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LockfileError::not_found(path))
    }
}

/// Open a lockfile and scan it for records of `category`
pub fn open_lockfile(
    path: &Path,
    category: Category,
) -> Result<LockfileParser<BufReader<File>>, LockfileError> {
    ensure_exists(path)?;
    let file = File::open(path).map_err(|e| LockfileError::read_error(path, e))?;
    Ok(LockfileParser::new(BufReader::new(file), path, category))
}
