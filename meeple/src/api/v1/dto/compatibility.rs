//! Profile compatibility DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::matching::{CategoryMatch, Compatibility, CompatibilityTier, OverallMatch};
use crate::models::UserId;

/// Query parameters for `GET /v1/users/{userId}/compatibility`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityQuery {
    /// The user looking at the profile.
    pub viewer_id: String,
}

/// Wire format: `"incompatible"`, `"compatible"`, `"very_compatible"`, `"best_match"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1CompatibilityTier {
    Incompatible,
    Compatible,
    VeryCompatible,
    BestMatch,
}

impl From<CompatibilityTier> for V1CompatibilityTier {
    fn from(tier: CompatibilityTier) -> Self {
        match tier {
            CompatibilityTier::Incompatible => Self::Incompatible,
            CompatibilityTier::Compatible => Self::Compatible,
            CompatibilityTier::VeryCompatible => Self::VeryCompatible,
            CompatibilityTier::BestMatch => Self::BestMatch,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMatchResponse {
    pub shared: usize,
    pub union: usize,
    /// Raw overlap percent; 0 when neither side has games here.
    pub percent: u8,
    /// Percent to show; 100 when `bothSidesEmpty`.
    pub display_percent: u8,
    pub both_sides_empty: bool,
    pub shared_game_ids: Vec<String>,
}

impl From<CategoryMatch> for CategoryMatchResponse {
    fn from(category: CategoryMatch) -> Self {
        Self {
            shared: category.stats.shared,
            union: category.stats.union,
            percent: category.stats.percent,
            display_percent: category.display_percent(),
            both_sides_empty: category.both_sides_empty,
            shared_game_ids: category
                .shared_game_ids
                .into_iter()
                .map(|id| id.into_inner())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallMatchResponse {
    pub shared: usize,
    pub union: usize,
    pub percent: u8,
    pub tier: V1CompatibilityTier,
    /// Human-readable tier, e.g. `"Very compatible"`.
    pub label: String,
}

impl From<OverallMatch> for OverallMatchResponse {
    fn from(overall: OverallMatch) -> Self {
        Self {
            shared: overall.stats.shared,
            union: overall.stats.union,
            percent: overall.stats.percent,
            tier: overall.tier.into(),
            label: overall.tier.label().to_string(),
        }
    }
}

/// Response for `GET /v1/users/{userId}/compatibility`.
///
/// When `available` is false the viewer has no collection data and every
/// score field is omitted.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub owner_id: String,
    pub viewer_id: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<CategoryMatchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<CategoryMatchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<CategoryMatchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallMatchResponse>,
}

impl CompatibilityResponse {
    pub fn new(owner: &UserId, viewer: &UserId, result: Compatibility) -> Self {
        let mut resp = Self {
            owner_id: owner.to_string(),
            viewer_id: viewer.to_string(),
            available: false,
            favorite: None,
            wishlist: None,
            owned: None,
            overall: None,
        };

        if let Compatibility::Available(report) = result {
            resp.available = true;
            resp.favorite = Some(report.favorite.into());
            resp.wishlist = Some(report.wishlist.into());
            resp.owned = Some(report.owned.into());
            resp.overall = Some(report.overall.into());
        }

        resp
    }
}
