use serde::{Deserialize, Serialize};

use super::sets::CollectionSet;

/// Overlap between two collection sets.
///
/// `percent` is `shared / union` scaled to 0..=100 and rounded half up. An
/// empty union yields 0; callers that need to tell "no data" apart from
/// "no overlap" check [`MatchStats::both_empty`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchStats {
    pub shared: usize,
    pub union: usize,
    pub percent: u8,
}

impl MatchStats {
    pub fn compute(a: &CollectionSet, b: &CollectionSet) -> Self {
        let shared = a.intersection(b).count();
        let union = a.len() + b.len() - shared;
        Self {
            shared,
            union,
            percent: overlap_percent(shared, union),
        }
    }

    pub fn both_empty(&self) -> bool {
        self.union == 0
    }
}

fn overlap_percent(shared: usize, union: usize) -> u8 {
    if union == 0 {
        return 0;
    }
    // round(shared * 100 / union) with halves rounded up, in integers
    let scaled = (shared * 200 + union) / (union * 2);
    scaled.min(100) as u8
}
