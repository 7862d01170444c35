//! Patch segment parsing.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // pattern is a literal, cannot fail to compile
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

#[allow(clippy::unwrap_used)] // pattern is a literal, cannot fail to compile
static ALPHA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+").unwrap());

/// A patch segment split into its numeric prefix and alphabetic suffix.
///
/// `alpha_part` is never empty; segments without a letter run default to `"a"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSegment {
    /// First maximal digit run in the segment, empty when there is none.
    pub number_part: String,
    /// First maximal lowercase letter run, `"a"` when there is none.
    pub alpha_part: String,
}

/// Splits a version segment into a numeric part and an alphabetic part.
///
/// The two runs are located independently by first match, not by a positional
/// split, so `"2a3b"` yields `{number: "2", alpha: "a"}` and everything after
/// the first runs is ignored. Uppercase letters are outside the tag grammar
/// and are never captured. This function has no failure mode.
pub fn separate(segment: &str) -> PatchSegment {
    let number_part = DIGIT_RUN
        .find(segment)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let alpha_part = ALPHA_RUN
        .find(segment)
        .map_or_else(|| "a".to_string(), |m| m.as_str().to_string());

    PatchSegment {
        number_part,
        alpha_part,
    }
}
