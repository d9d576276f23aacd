//! Review status vocabulary and rating normalization.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// The review is shown on the public board. Default for new submissions.
pub const STATUS_VISIBLE: &str = "visible";
/// The review is kept but not shown publicly.
pub const STATUS_HIDDEN: &str = "hidden";

/// All valid review statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_VISIBLE, STATUS_HIDDEN];

/// Rating bounds. Submitted ratings are normalized into this range, never
/// rejected for being out of it.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Maximum number of reviews returned by a single listing.
pub const LIST_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Normalization / validation
// ---------------------------------------------------------------------------

/// Round a submitted rating to the nearest integer and clamp it into
/// [[`MIN_RATING`], [`MAX_RATING`]].
pub fn clamp_rating(rating: f64) -> i32 {
    (rating.round() as i32).clamp(MIN_RATING, MAX_RATING)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid review status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
