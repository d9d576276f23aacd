//! Shared query and body parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for delete endpoints (`?id=`).
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Optional JSON body for delete endpoints (`{ "id": ... }`). The query
/// string takes precedence when both carry an id.
#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    pub id: Option<String>,
}

/// Query parameters for review listings. `?all=1` or `?all=true` includes
/// hidden reviews (used by the admin dashboard).
#[derive(Debug, Deserialize)]
pub struct ListReviewsParams {
    pub all: Option<String>,
}

impl ListReviewsParams {
    /// Whether hidden reviews should be included.
    pub fn include_hidden(&self) -> bool {
        matches!(self.all.as_deref(), Some("1") | Some("true"))
    }
}
