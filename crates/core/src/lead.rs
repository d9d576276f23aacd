//! Lead status and plan vocabulary.
//!
//! A lead is a contact-form submission. Its status moves new -> contacted
//! -> closed by convention; the direction is not enforced, only membership
//! in the vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a freshly captured lead.
pub const STATUS_NEW: &str = "new";
/// The lead has been reached out to.
pub const STATUS_CONTACTED: &str = "contacted";
/// The inquiry is settled (won or lost).
pub const STATUS_CLOSED: &str = "closed";

/// All valid lead statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_CONTACTED, STATUS_CLOSED];

/// Maximum number of leads returned by a single listing.
pub const LIST_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Pricing plan a lead can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    Express,
    Standard,
    Premium,
    Custom,
}

impl Plan {
    /// Parse a plan label submitted with the form.
    ///
    /// Unknown labels yield `None`; the caller drops them rather than
    /// rejecting the submission.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Express" => Some(Plan::Express),
            "Standard" => Some(Plan::Standard),
            "Premium" => Some(Plan::Premium),
            "Custom" => Some(Plan::Custom),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid lead status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
