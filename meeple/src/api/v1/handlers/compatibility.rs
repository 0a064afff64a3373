//! v1 Profile compatibility handler.

use axum::extract::{Path, State};

use crate::api::extractors::AppQuery;
use crate::api::v1::dto::{CompatibilityQuery, CompatibilityResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::UserId;

/// `GET /api/v1/users/{userId}/compatibility`
///
/// Scores how well the viewer's collection matches the profile owner's.
/// Returns `available: false` when the viewer has no collection data.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/compatibility",
    tag = "compatibility",
    operation_id = "compatibility.get",
    params(
        ("userId" = String, Path, description = "Profile owner ID"),
        CompatibilityQuery,
    ),
    responses(
        (status = 200, description = "Compatibility report", body = CompatibilityResponse),
        (status = 400, description = "Invalid user id or missing viewerId", body = ApiError),
    )
)]
pub async fn get_compatibility(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    AppQuery(query): AppQuery<CompatibilityQuery>,
) -> ApiResponse<CompatibilityResponse> {
    let owner = match UserId::parse(&owner_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    let viewer = match UserId::parse(&query.viewer_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    match state.collections.compatibility(&owner, &viewer).await {
        Ok(result) => ApiResponse::success(CompatibilityResponse::new(&owner, &viewer, result)),
        Err(e) => e.into(),
    }
}
