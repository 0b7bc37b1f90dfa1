//! ============================================================================
//! Requirement Matcher - Build-vs-game frame-rate classification
//! ============================================================================
//! Compares a build's representative benchmark figure against a game's
//! minimum and recommended frame rates. Both boundaries are inclusive.
//! ============================================================================

use serde::{Deserialize, Serialize};

use crate::types::{Build, GameProfile};

/// How well a build satisfies a game's frame-rate requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Meets or beats the recommended frame rate
    Recommended,
    /// Meets the minimum but not the recommended frame rate
    Acceptable,
    /// Below the minimum frame rate
    Insufficient,
}

impl MatchTier {
    /// Classify a benchmark frame rate against a game profile
    pub fn from_fps(fps: u32, profile: &GameProfile) -> Self {
        match fps {
            x if x >= profile.rec_fps => MatchTier::Recommended,
            x if x >= profile.min_fps => MatchTier::Acceptable,
            _ => MatchTier::Insufficient,
        }
    }

    /// Badge label shown next to a build in the requirements view
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTier::Recommended => "Отлично",
            MatchTier::Acceptable => "Подойдёт",
            MatchTier::Insufficient => "Слабо",
        }
    }
}

/// Classify one build against a game profile
pub fn classify(build: &Build, profile: &GameProfile) -> MatchTier {
    MatchTier::from_fps(build.benchmark_fps, profile)
}

/// Classify every build, preserving catalog order
pub fn classify_all<'a>(
    builds: &'a [Build],
    profile: &GameProfile,
) -> Vec<(&'a Build, MatchTier)> {
    builds.iter().map(|b| (b, classify(b, profile))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use proptest::prelude::*;

    fn profile(min_fps: u32, rec_fps: u32) -> GameProfile {
        GameProfile {
            key: "test".into(),
            display_name: "Test Game".into(),
            min_fps,
            rec_fps,
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let p = profile(60, 144);
        assert_eq!(MatchTier::from_fps(144, &p), MatchTier::Recommended);
        assert_eq!(MatchTier::from_fps(143, &p), MatchTier::Acceptable);
        assert_eq!(MatchTier::from_fps(60, &p), MatchTier::Acceptable);
        assert_eq!(MatchTier::from_fps(59, &p), MatchTier::Insufficient);
        assert_eq!(MatchTier::from_fps(0, &p), MatchTier::Insufficient);
    }

    #[test]
    fn test_recommended_checked_before_minimum() {
        // min == rec: the recommended arm must win at the shared boundary
        let p = profile(60, 60);
        assert_eq!(MatchTier::from_fps(60, &p), MatchTier::Recommended);
        assert_eq!(MatchTier::from_fps(59, &p), MatchTier::Insufficient);
    }

    #[test]
    fn test_reference_catalog_against_valorant() {
        let cat = catalog();
        let valorant = cat.game("valorant").unwrap();

        let tiers: Vec<MatchTier> = classify_all(cat.builds(), valorant)
            .iter()
            .map(|(_, t)| *t)
            .collect();
        assert_eq!(
            tiers,
            vec![
                MatchTier::Acceptable,  // 60 fps
                MatchTier::Acceptable,  // 100 fps
                MatchTier::Recommended, // 144 fps
            ]
        );
    }

    #[test]
    fn test_reference_catalog_against_cyberpunk() {
        let cat = catalog();
        let cyberpunk = cat.game("cyberpunk").unwrap();

        // Every reference build clears Cyberpunk's 60 fps recommendation
        for (_, tier) in classify_all(cat.builds(), cyberpunk) {
            assert_eq!(tier, MatchTier::Recommended);
        }
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let cat = catalog();
        let rdr2 = cat.game("rdr2").unwrap();

        let ids: Vec<u32> = classify_all(cat.builds(), rdr2)
            .iter()
            .map(|(b, _)| b.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(MatchTier::Recommended.display_name(), "Отлично");
        assert_eq!(MatchTier::Acceptable.display_name(), "Подойдёт");
        assert_eq!(MatchTier::Insufficient.display_name(), "Слабо");
    }

    fn rank(tier: MatchTier) -> u8 {
        match tier {
            MatchTier::Insufficient => 0,
            MatchTier::Acceptable => 1,
            MatchTier::Recommended => 2,
        }
    }

    proptest! {
        #[test]
        fn prop_more_fps_never_ranks_worse(
            fps in 0u32..600,
            min_fps in 0u32..300,
            spread in 0u32..300,
        ) {
            let p = profile(min_fps, min_fps + spread);
            prop_assert!(
                rank(MatchTier::from_fps(fps + 1, &p)) >= rank(MatchTier::from_fps(fps, &p))
            );
        }
    }
}
