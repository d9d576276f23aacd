//! Domain vocabulary and validation for the Eutian site backend.
//!
//! This crate holds the pure domain layer: entity status and plan
//! enumerations, field validation helpers, rating clamping, and the shared
//! error taxonomy. It performs no I/O; the persistence and HTTP layers
//! build on it.

pub mod error;
pub mod lead;
pub mod prototype;
pub mod review;
pub mod types;
pub mod validate;
