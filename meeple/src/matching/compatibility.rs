use serde::{Deserialize, Serialize};

use super::sets::{CollectionCategory, CollectionSets};
use super::stats::MatchStats;
use crate::models::GameId;

/// Percent shown when neither side has any game in a category.
pub const BOTH_EMPTY_DISPLAY_PERCENT: u8 = 100;

/// Qualitative label for an overall match percent. Bands are inclusive on
/// their upper bound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    Incompatible,
    Compatible,
    VeryCompatible,
    BestMatch,
}

impl CompatibilityTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=25 => Self::Incompatible,
            26..=50 => Self::Compatible,
            51..=75 => Self::VeryCompatible,
            _ => Self::BestMatch,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Incompatible => "Incompatible",
            Self::Compatible => "Compatible",
            Self::VeryCompatible => "Very compatible",
            Self::BestMatch => "Best match",
        }
    }
}

impl std::fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Overlap for one flag category between the profile owner and the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub stats: MatchStats,
    /// Neither user has a game in this category. The raw percent stays 0.
    pub both_sides_empty: bool,
    pub shared_game_ids: Vec<GameId>,
}

impl CategoryMatch {
    fn between(owner: &CollectionSets, viewer: &CollectionSets, category: CollectionCategory) -> Self {
        let a = owner.get(category);
        let b = viewer.get(category);
        let stats = MatchStats::compute(a, b);
        Self {
            stats,
            both_sides_empty: stats.both_empty(),
            shared_game_ids: a.intersection(b).cloned().collect(),
        }
    }

    /// Percent for presentation: a category empty on both sides counts as a
    /// full match rather than 0%.
    pub fn display_percent(&self) -> u8 {
        if self.both_sides_empty {
            BOTH_EMPTY_DISPLAY_PERCENT
        } else {
            self.stats.percent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverallMatch {
    pub stats: MatchStats,
    pub tier: CompatibilityTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityReport {
    pub favorite: CategoryMatch,
    pub wishlist: CategoryMatch,
    pub owned: CategoryMatch,
    pub overall: OverallMatch,
}

impl CompatibilityReport {
    pub fn category(&self, category: CollectionCategory) -> Option<&CategoryMatch> {
        match category {
            CollectionCategory::Favorite => Some(&self.favorite),
            CollectionCategory::Wishlist => Some(&self.wishlist),
            CollectionCategory::Owned => Some(&self.owned),
            CollectionCategory::Any => None,
        }
    }
}

/// Outcome of comparing a profile owner's collection with the viewer's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    /// The viewer has no collection data; no score is meaningful.
    Unavailable,
    Available(CompatibilityReport),
}

impl Compatibility {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn report(&self) -> Option<&CompatibilityReport> {
        match self {
            Self::Available(report) => Some(report),
            Self::Unavailable => None,
        }
    }
}

/// Compare the profile owner's collection against the viewer's.
///
/// The overall score is the overlap of the two "any" sets and drives the tier.
pub fn compare_collections(owner: &CollectionSets, viewer: &CollectionSets) -> Compatibility {
    if viewer.is_empty() {
        return Compatibility::Unavailable;
    }

    let overall = MatchStats::compute(owner.any(), viewer.any());

    Compatibility::Available(CompatibilityReport {
        favorite: CategoryMatch::between(owner, viewer, CollectionCategory::Favorite),
        wishlist: CategoryMatch::between(owner, viewer, CollectionCategory::Wishlist),
        owned: CategoryMatch::between(owner, viewer, CollectionCategory::Owned),
        overall: OverallMatch {
            stats: overall,
            tier: CompatibilityTier::from_percent(overall.percent),
        },
    })
}
