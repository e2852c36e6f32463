//! Version ordering for lockfile and registry version strings
//!
//! Versions are compared component by component on `.` boundaries. Inside a
//! component, runs of digits compare numerically and everything else compares
//! lexically. This is a "version sort" order, not SemVer precedence: a
//! pre-release suffix sorts after the plain release (`1.0.0 < 1.0.0-beta`).

use std::cmp::Ordering;

/// Result of comparing a local version against another version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    /// Both versions are the same
    Equal,
    /// The first version is older
    Older,
    /// The first version is newer
    Newer,
}

impl From<Ordering> for VersionOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => VersionOrdering::Older,
            Ordering::Equal => VersionOrdering::Equal,
            Ordering::Greater => VersionOrdering::Newer,
        }
    }
}

/// Compare two version strings
pub fn compare_versions(a: &str, b: &str) -> VersionOrdering {
    if a == b {
        return VersionOrdering::Equal;
    }
    version_cmp(a, b).into()
}

/// Total order over version strings
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    let mut parts_a = a.split('.');
    let mut parts_b = b.split('.');

    loop {
        let ordering = match (parts_a.next(), parts_b.next()) {
            (None, None) => return Ordering::Equal,
            (Some(pa), Some(pb)) => component_cmp(pa, pb),
            // A missing component counts as "0" (1.2 == 1.2.0)
            (Some(pa), None) => component_cmp(pa, MISSING_COMPONENT),
            (None, Some(pb)) => component_cmp(MISSING_COMPONENT, pb),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

const MISSING_COMPONENT: &str = "0";

/// A run of characters inside a version component
#[derive(Debug)]
enum Chunk<'a> {
    Text(&'a str),
    Number(&'a str),
}

impl PartialEq for Chunk<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Chunk<'_> {}

impl Ord for Chunk<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => numeric_cmp(a, b),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Less,
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn component_cmp(a: &str, b: &str) -> Ordering {
    // Iterator::cmp makes a strict prefix sort first
    chunks(a).cmp(chunks(b))
}

/// Split a component into alternating digit and non-digit runs
fn chunks(component: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = component;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit {
            Chunk::Number(run)
        } else {
            Chunk::Text(run)
        })
    })
}

/// Compare digit strings of any length without parsing them
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
