//! Collection compatibility scoring.
//!
//! Pure functions over already-fetched rows: build per-flag sets for each
//! user, measure their overlap, and roll the result up into a tiered report.

pub mod compatibility;
pub mod sets;
pub mod stats;

pub use compatibility::{
    compare_collections, CategoryMatch, Compatibility, CompatibilityReport, CompatibilityTier,
    OverallMatch, BOTH_EMPTY_DISPLAY_PERCENT,
};
pub use sets::{CollectionCategory, CollectionSet, CollectionSets};
pub use stats::MatchStats;
