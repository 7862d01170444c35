//! Next-tag derivation from the latest release tag.

use crate::version::strategy::VersioningStrategy;

/// Builds the next hotfix tag from the latest existing tag.
///
/// The tag is split on `.`, the selected strategy is applied to the last
/// segment only, and the segments are rejoined. Everything before the patch
/// segment passes through untouched, prefix included:
/// `v1.0.3` + numeric → `v1.0.4`, `v1.0.3z` + alphanumeric → `v1.0.3aa`.
pub fn create_hotfix_tag(latest_tag: &str, strategy: VersioningStrategy) -> String {
    let mut segments: Vec<String> = latest_tag.split('.').map(str::to_string).collect();

    if let Some(patch) = segments.last_mut() {
        *patch = strategy.increment(patch);
    }

    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strategy_bumps_final_segment() {
        assert_eq!(
            create_hotfix_tag("v1.0.3", VersioningStrategy::Numeric),
            "v1.0.4"
        );
    }

    #[test]
    fn alphanumeric_strategy_bumps_letter_suffix() {
        assert_eq!(
            create_hotfix_tag("v1.0.3a", VersioningStrategy::Alphanumeric),
            "v1.0.3b"
        );
    }

    #[test]
    fn alphanumeric_strategy_carries_past_z() {
        assert_eq!(
            create_hotfix_tag("v1.0.3z", VersioningStrategy::Alphanumeric),
            "v1.0.3aa"
        );
    }

    #[test]
    fn earlier_segments_are_untouched() {
        assert_eq!(
            create_hotfix_tag("release-2.9.7", VersioningStrategy::Numeric),
            "release-2.9.8"
        );
    }

    #[test]
    fn single_segment_tag_is_incremented_whole() {
        assert_eq!(create_hotfix_tag("7", VersioningStrategy::Numeric), "8");
    }
}
