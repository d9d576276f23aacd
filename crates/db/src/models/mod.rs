//! Document models and request DTOs.
//!
//! Each submodule contains:
//! - A `*Document` struct matching the stored BSON shape
//! - A public struct exposing the record with a string `id`
//! - `Deserialize` DTOs for the create and update requests, with every
//!   request-supplied field optional so presence is checked by domain
//!   validation rather than by serde rejection
//!
//! Wire names are camelCase to match the site's public contract.

pub mod lead;
pub mod prototype;
pub mod review;
