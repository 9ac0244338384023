//! Crewline domain core.
//!
//! Pure domain logic for the staffing platform's two correctness-critical
//! concerns:
//!
//! - [`availability`] — interval validation for talent availability windows
//!   (six-month horizon, half-open overlap detection).
//! - [`verification`] — skill-group verification logic: the assessment state
//!   machine, mandatory-skill completeness checks, skill snapshots, and
//!   status re-derivation.
//!
//! This crate has zero internal dependencies so the store boundary and the
//! workflow layer can both build on it.

pub mod availability;
pub mod error;
pub mod model;
pub mod roles;
pub mod types;
pub mod verification;

pub use error::CoreError;
