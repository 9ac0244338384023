//! Remote authoritative store boundary.
//!
//! The platform's talents, skills, experts, windows, and assessments live in
//! a remote store reached over request/response calls that may fail or race.
//! This crate defines that boundary:
//!
//! - [`traits`] — the collaborator contracts the workflow layer consumes
//!   (`SkillDirectory`, `ExpertDirectory`, `WindowStore`, `AssessmentStore`).
//! - [`http`] — [`RemoteStore`], the reqwest implementation of all four.
//! - [`collection`] — [`Collection`], the tolerant list-shape decoder, so no
//!   other layer ever shape-sniffs a list response.
//! - [`config`] — environment-driven [`StoreConfig`].

pub mod collection;
pub mod config;
pub mod error;
pub mod http;
pub mod traits;

pub use collection::Collection;
pub use config::StoreConfig;
pub use error::StoreError;
pub use http::RemoteStore;
pub use traits::{AssessmentStore, ExpertDirectory, SkillDirectory, WindowStore};
