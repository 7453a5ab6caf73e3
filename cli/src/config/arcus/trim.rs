//! Edge-anchored removal of a repeated character.
//!
//! Unlike [`str::trim`], only one character is considered and only the run
//! touching the chosen edge is removed. A target character that first
//! appears one position in from the edge is left alone.

/// Edge of a string a trim is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Start of the string.
    Front,
    /// End of the string.
    Back,
}

/// Return `s` without the maximal run of `target` anchored at `edge`.
///
/// Nothing is removed unless the character exactly at the edge is `target`.
/// A string made up entirely of `target` becomes empty.
///
/// # Examples
///
/// ```
/// use arcus_cli::config::arcus::{Edge, strip_run};
///
/// assert_eq!(strip_run("  \"git\",", ' ', Edge::Front), "\"git\",");
/// assert_eq!(strip_run("\"git\",", ',', Edge::Back), "\"git\"");
/// // Not anchored at the edge: unchanged.
/// assert_eq!(strip_run("a,b", ',', Edge::Back), "a,b");
/// ```
#[must_use]
pub fn strip_run(s: &str, target: char, edge: Edge) -> &str {
    match edge {
        Edge::Front => s.trim_start_matches(target),
        Edge::Back => s.trim_end_matches(target),
    }
}

/// In-place form of [`strip_run`]; never reallocates.
pub fn trim(s: &mut String, target: char, edge: Edge) {
    match edge {
        Edge::Front => {
            let removed = s.len() - strip_run(s, target, edge).len();
            s.drain(..removed);
        }
        Edge::Back => {
            let kept = strip_run(s, target, edge).len();
            s.truncate(kept);
        }
    }
}

/// Apply a sequence of trims, one layer at a time.
pub fn peel(s: &mut String, layers: &[(char, Edge)]) {
    for &(target, edge) in layers {
        trim(s, target, edge);
    }
}
