//! Versioning strategies for advancing a patch segment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::version::segment::separate;

/// Raised when a versioning strategy name is not recognized.
///
/// Strategy names are validated where they enter the system; downstream code
/// only ever sees the parsed [`VersioningStrategy`] enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized versioning strategy '{0}' (expected 'numeric' or 'alphanumeric')")]
pub struct ConfigurationError(pub String);

/// How the patch segment of a tag is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningStrategy {
    /// Treat the patch segment as a base-10 integer and add 1.
    Numeric,
    /// Advance the letter suffix as a bijective base-26 sequence over `a..z`.
    Alphanumeric,
}

impl FromStr for VersioningStrategy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "alphanumeric" => Ok(Self::Alphanumeric),
            other => Err(ConfigurationError(other.to_string())),
        }
    }
}

impl fmt::Display for VersioningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

impl VersioningStrategy {
    /// Applies this strategy to a patch segment and returns the next segment.
    pub fn increment(self, segment: &str) -> String {
        match self {
            Self::Numeric => increment_numeric(segment),
            Self::Alphanumeric => increment_alphanumeric(segment),
        }
    }
}

/// Advances a purely numeric patch segment by 1.
///
/// Any non-numeric remainder in the segment is discarded; a segment with no
/// digits at all counts from 0.
pub fn increment_numeric(segment: &str) -> String {
    let patch = separate(segment).number_part.parse::<u64>().unwrap_or(0);
    (patch + 1).to_string()
}

/// Advances the letter suffix of a patch segment by one, carrying on overflow.
///
/// The suffix is incremented as a bijective base-26 sequence, scanning right
/// to left: `z` wraps to `a` and carries left, any other letter steps to its
/// successor and stops, and an all-`z` suffix gains a new leading `a`. The
/// numeric prefix is carried through unchanged.
///
/// Only lowercase ASCII letters participate; anything else in the segment is
/// dropped by [`separate`].
pub fn increment_alphanumeric(segment: &str) -> String {
    let patch = separate(segment);

    let mut letters: Vec<u8> = patch.alpha_part.into_bytes();
    let mut carried = true;
    for letter in letters.iter_mut().rev() {
        if *letter == b'z' {
            *letter = b'a';
        } else {
            *letter += 1;
            carried = false;
            break;
        }
    }
    if carried {
        letters.insert(0, b'a');
    }

    // alpha_part is produced by separate() and is always ASCII letters.
    let alpha = String::from_utf8(letters).unwrap_or_else(|_| "a".to_string());
    format!("{}{}", patch.number_part, alpha)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn numeric_increments_by_one() {
        assert_eq!(increment_numeric("7"), "8");
        assert_eq!(increment_numeric("0"), "1");
        assert_eq!(increment_numeric("99"), "100");
    }

    #[test]
    fn numeric_discards_non_numeric_remainder() {
        assert_eq!(increment_numeric("3a"), "4");
        assert_eq!(increment_numeric(""), "1");
    }

    #[test]
    fn alphanumeric_steps_single_letter() {
        assert_eq!(increment_alphanumeric("a"), "b");
        assert_eq!(increment_alphanumeric("y"), "z");
    }

    #[test]
    fn alphanumeric_carries_past_z() {
        assert_eq!(increment_alphanumeric("z"), "aa");
        assert_eq!(increment_alphanumeric("az"), "ba");
        assert_eq!(increment_alphanumeric("zz"), "aaa");
    }

    #[test]
    fn alphanumeric_keeps_numeric_prefix() {
        assert_eq!(increment_alphanumeric("15z"), "15aa");
        assert_eq!(increment_alphanumeric("3"), "3b");
    }

    #[test]
    fn twenty_six_increments_from_a_reach_aa() {
        let mut segment = "a".to_string();
        for _ in 0..26 {
            segment = increment_alphanumeric(&segment);
        }
        assert_eq!(segment, "aa");
    }

    #[test]
    fn strategy_names_parse() {
        assert_eq!(
            "numeric".parse::<VersioningStrategy>(),
            Ok(VersioningStrategy::Numeric)
        );
        assert_eq!(
            "alphanumeric".parse::<VersioningStrategy>(),
            Ok(VersioningStrategy::Alphanumeric)
        );
    }

    #[test]
    fn unknown_strategy_name_is_a_configuration_error() {
        let err = "unknown".parse::<VersioningStrategy>().unwrap_err();
        assert_eq!(err, ConfigurationError("unknown".to_string()));
    }

    /// Orders letter suffixes by length first, then alphabetically.
    fn suffix_order(a: &str, b: &str) -> std::cmp::Ordering {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }

    proptest! {
        #[test]
        fn alphanumeric_sequence_is_strictly_monotonic(
            start in "[a-z]{1,5}",
            steps in 1usize..80,
        ) {
            let mut previous = start;
            for _ in 0..steps {
                let next = increment_alphanumeric(&previous);
                prop_assert_eq!(
                    suffix_order(&previous, &next),
                    std::cmp::Ordering::Less
                );
                previous = next;
            }
        }
    }
}
