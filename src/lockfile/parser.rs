//! Line scanner for pubspec.lock
//!
//! The lockfile is YAML, but only three line shapes matter here:
//!
//! ```text
//!   http:                       <- block start (2 spaces, ends with ':')
//!     dependency: "direct main" <- category field (4 spaces)
//!     version: "1.1.0"          <- version field (4 spaces)
//! ```
//!
//! Everything else is skipped, so no YAML parser is involved.

use crate::domain::{Category, Dependency};
use crate::error::LockfileError;
use regex::Regex;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::LazyLock;

/// pub package names: letters, digits and underscores, not starting with a digit
static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

const BLOCK_INDENT: &str = "  ";
const FIELD_INDENT: &str = "    ";

/// Returns true if `name` is a valid pub package identifier
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME_RE.is_match(name)
}

/// Classification of a single lockfile line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `  <name>:` opening a package block
    BlockStart(&'a str),
    /// `    dependency: <raw value>`
    Dependency(&'a str),
    /// `    version: <raw value>`
    Version(&'a str),
    /// Anything else
    Other,
}

impl<'a> LineKind<'a> {
    /// Classify a raw line (without its newline)
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim_end();

        if let Some(rest) = strip_exact_indent(line, FIELD_INDENT) {
            if let Some(value) = rest.strip_prefix("dependency:") {
                return LineKind::Dependency(value.trim());
            }
            if let Some(value) = rest.strip_prefix("version:") {
                return LineKind::Version(value.trim());
            }
            return LineKind::Other;
        }

        if let Some(rest) = strip_exact_indent(line, BLOCK_INDENT) {
            if let Some(key) = rest.strip_suffix(':') {
                return LineKind::BlockStart(key.trim_end());
            }
        }

        LineKind::Other
    }
}

/// Strip `indent` if the line has exactly that much leading whitespace
fn strip_exact_indent<'a>(line: &'a str, indent: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(indent)?;
    match rest.chars().next() {
        Some(c) if !c.is_whitespace() => Some(rest),
        _ => None,
    }
}

/// Remove one pair of surrounding double or single quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Scanner state between lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState {
    /// No package block is open
    Idle,
    /// Inside a block whose category has not matched (yet)
    InBlock { name: String, line: usize },
    /// Inside a block whose category matches the requested one
    InMatchingBlock { name: String, line: usize },
}

/// Lazy, single-pass iterator over the records of one category
pub struct LockfileParser<R> {
    lines: std::io::Lines<R>,
    path: PathBuf,
    category: Category,
    state: ParseState,
    line_no: usize,
    finished: bool,
}

impl<R: BufRead> LockfileParser<R> {
    /// Create a parser over `reader`; `path` is only used in error messages
    pub fn new(reader: R, path: impl Into<PathBuf>, category: Category) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            category,
            state: ParseState::Idle,
            line_no: 0,
            finished: false,
        }
    }

    /// Current scanner state
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Apply one classified line, returning an item if the line completes one
    fn step(&mut self, kind: LineKind<'_>) -> Option<Result<Dependency, LockfileError>> {
        let state = std::mem::replace(&mut self.state, ParseState::Idle);

        match (state, kind) {
            (_, LineKind::BlockStart(name)) => {
                self.state = ParseState::InBlock {
                    name: name.to_string(),
                    line: self.line_no,
                };
                None
            }
            (ParseState::InBlock { name, line }, LineKind::Dependency(value)) => {
                self.state = if value == self.category.lockfile_token() {
                    ParseState::InMatchingBlock { name, line }
                } else {
                    ParseState::InBlock { name, line }
                };
                None
            }
            // Names are only checked once the block is known to belong to this category
            (ParseState::InMatchingBlock { name, line }, LineKind::Version(_))
                if !is_valid_package_name(&name) =>
            {
                Some(Err(LockfileError::InvalidPackageName { name, line }))
            }
            (ParseState::InMatchingBlock { name, .. }, LineKind::Version(value)) => {
                let version = unquote(value);
                if version.is_empty() {
                    Some(Err(LockfileError::EmptyVersion {
                        name,
                        line: self.line_no,
                    }))
                } else {
                    Some(Ok(Dependency::new(name, self.category, version)))
                }
            }
            // A version line always closes the block, matched or not
            (_, LineKind::Version(_)) => None,
            (state, _) => {
                self.state = state;
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for LockfileParser<R> {
    type Item = Result<Dependency, LockfileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(LockfileError::read_error(&self.path, e)));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };
            self.line_no += 1;

            if let Some(item) = self.step(LineKind::classify(&line)) {
                return Some(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(content: &str, category: Category) -> Vec<Result<Dependency, LockfileError>> {
        LockfileParser::new(Cursor::new(content), "pubspec.lock", category).collect()
    }

    fn parse_ok(content: &str, category: Category) -> Vec<Dependency> {
        parse(content, category)
            .into_iter()
            .filter_map(Result::ok)
            .collect()
    }

    const SAMPLE: &str = r#"# Generated by pub
# See https://dart.dev/tools/pub/glossary#lockfile
packages:
  args:
    dependency: transitive
    description:
      name: args
      sha256: "eef6c46b622e0494a36c5a12d10d77fb4e855501a91c1b9ef9339326e58f0596"
      url: "https://pub.dev"
    source: hosted
    version: "2.4.2"
  http:
    dependency: "direct main"
    description:
      name: http
      url: "https://pub.dev"
    source: hosted
    version: "1.1.0"
  lints:
    dependency: "direct dev"
    description:
      name: lints
      url: "https://pub.dev"
    source: hosted
    version: "2.1.1"
sdks:
  dart: ">=3.0.0 <4.0.0"
"#;

    #[test]
    fn test_classify_block_start() {
        assert_eq!(LineKind::classify("  http:"), LineKind::BlockStart("http"));
        assert_eq!(LineKind::classify("  http:  \r"), LineKind::BlockStart("http"));
    }

    #[test]
    fn test_classify_fields() {
        assert_eq!(
            LineKind::classify("    dependency: \"direct main\""),
            LineKind::Dependency("\"direct main\"")
        );
        assert_eq!(
            LineKind::classify("    version: \"1.0.0\""),
            LineKind::Version("\"1.0.0\"")
        );
    }

    #[test]
    fn test_classify_ignores_other_indentation() {
        assert_eq!(LineKind::classify("packages:"), LineKind::Other);
        assert_eq!(LineKind::classify("   http:"), LineKind::Other);
        assert_eq!(LineKind::classify("      name: http"), LineKind::Other);
        assert_eq!(LineKind::classify("      version: \"9.9.9\""), LineKind::Other);
        assert_eq!(LineKind::classify("    description:"), LineKind::Other);
        assert_eq!(LineKind::classify("  dart: \">=3.0.0 <4.0.0\""), LineKind::Other);
    }

    #[test]
    fn test_single_transitive_block() {
        let content = "packages:\n  foo:\n    dependency: transitive\n    version: \"1.0.0\"\n";
        let deps = parse_ok(content, Category::Transitive);
        assert_eq!(deps, vec![Dependency::new("foo", Category::Transitive, "1.0.0")]);
    }

    #[test]
    fn test_sample_by_category() {
        let main = parse_ok(SAMPLE, Category::DirectMain);
        assert_eq!(main, vec![Dependency::new("http", Category::DirectMain, "1.1.0")]);

        let dev = parse_ok(SAMPLE, Category::DirectDev);
        assert_eq!(dev, vec![Dependency::new("lints", Category::DirectDev, "2.1.1")]);

        let transitive = parse_ok(SAMPLE, Category::Transitive);
        assert_eq!(
            transitive,
            vec![Dependency::new("args", Category::Transitive, "2.4.2")]
        );
    }

    #[test]
    fn test_non_matching_block_yields_nothing() {
        let content = "packages:\n  foo:\n    dependency: transitive\n    version: \"1.0.0\"\n";
        assert!(parse(content, Category::DirectMain).is_empty());
    }

    #[test]
    fn test_category_is_quote_sensitive() {
        let content = "packages:\n  foo:\n    dependency: direct main\n    version: \"1.0.0\"\n";
        assert!(parse(content, Category::DirectMain).is_empty());

        let content = "packages:\n  foo:\n    dependency: \"transitive\"\n    version: \"1.0.0\"\n";
        assert!(parse(content, Category::Transitive).is_empty());
    }

    #[test]
    fn test_block_without_version_does_not_leak() {
        // foo matches but has no version; bar's version must not be paired with foo
        let content = "\
packages:
  foo:
    dependency: \"direct main\"
  bar:
    dependency: transitive
    version: \"3.0.0\"
";
        assert!(parse(content, Category::DirectMain).is_empty());
    }

    #[test]
    fn test_version_before_dependency_line_is_ignored() {
        let content = "\
packages:
  foo:
    version: \"1.0.0\"
    dependency: transitive
";
        assert!(parse(content, Category::Transitive).is_empty());
    }

    #[test]
    fn test_version_without_block_is_ignored() {
        let content = "    dependency: transitive\n    version: \"1.0.0\"\n";
        assert!(parse(content, Category::Transitive).is_empty());
    }

    #[test]
    fn test_unquoted_version() {
        let content = "packages:\n  foo:\n    dependency: transitive\n    version: 1.2.3\n";
        let deps = parse_ok(content, Category::Transitive);
        assert_eq!(deps[0].local_version, "1.2.3");
    }

    #[test]
    fn test_invalid_name_reports_and_continues() {
        let content = "\
packages:
  1bad:
    dependency: transitive
    version: \"1.0.0\"
  good:
    dependency: transitive
    version: \"2.0.0\"
";
        let items = parse(content, Category::Transitive);
        assert_eq!(items.len(), 2);
        match &items[0] {
            Err(LockfileError::InvalidPackageName { name, line }) => {
                assert_eq!(name, "1bad");
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected item: {:?}", other),
        }
        assert_eq!(
            items[1].as_ref().unwrap(),
            &Dependency::new("good", Category::Transitive, "2.0.0")
        );
    }

    #[test]
    fn test_invalid_name_in_other_category_is_silent() {
        let content = "\
packages:
  9bad:
    dependency: transitive
    version: \"1.0.0\"
  good:
    dependency: \"direct main\"
    version: \"2.0.0\"
";
        let items = parse(content, Category::DirectMain);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap().name, "good");
        assert!(parse(content, Category::DirectDev).is_empty());
    }

    #[test]
    fn test_empty_version_reports_and_resets() {
        let content = "\
packages:
  foo:
    dependency: transitive
    version: \"\"
  bar:
    dependency: transitive
    version: \"1.0.0\"
";
        let items = parse(content, Category::Transitive);
        assert!(matches!(
            items[0],
            Err(LockfileError::EmptyVersion { ref name, line: 4 }) if name == "foo"
        ));
        assert_eq!(items[1].as_ref().unwrap().name, "bar");
    }

    #[test]
    fn test_state_transitions() {
        let mut parser = LockfileParser::new(Cursor::new(""), "pubspec.lock", Category::DirectDev);
        assert_eq!(parser.state(), &ParseState::Idle);

        parser.step(LineKind::BlockStart("lints"));
        assert_eq!(
            parser.state(),
            &ParseState::InBlock {
                name: "lints".to_string(),
                line: 0,
            }
        );

        parser.step(LineKind::Dependency("\"direct dev\""));
        assert_eq!(
            parser.state(),
            &ParseState::InMatchingBlock {
                name: "lints".to_string(),
                line: 0,
            }
        );

        parser.step(LineKind::Other);
        assert!(matches!(parser.state(), ParseState::InMatchingBlock { .. }));

        let item = parser.step(LineKind::Version("\"2.1.1\""));
        assert!(matches!(item, Some(Ok(_))));
        assert_eq!(parser.state(), &ParseState::Idle);
    }

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package_name("http"));
        assert!(is_valid_package_name("flutter_lints"));
        assert!(is_valid_package_name("_private"));
        assert!(is_valid_package_name("crypto2"));
        assert!(!is_valid_package_name("2d_math"));
        assert!(!is_valid_package_name("bad-name"));
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("\"quoted\""));
    }
}
