//! Verification and availability workflows.
//!
//! Orchestration over the remote store boundary:
//!
//! - [`VerificationWorkflow`] — assessment submission, invalidation, history,
//!   and bulk status refresh for (talent, skill group) pairs.
//! - [`EligibilityResolver`] — which experts may assess a skill group.
//! - [`VerificationStatusCache`] — advisory process-local status map,
//!   written only by the workflow.
//! - [`AvailabilityService`] — the save path around the pure interval
//!   validator in `crewline-core`.

pub mod availability;
pub mod eligibility;
pub mod error;
pub mod status_cache;
pub mod workflow;

pub use availability::{AvailabilityError, AvailabilityService};
pub use eligibility::EligibilityResolver;
pub use error::WorkflowError;
pub use status_cache::VerificationStatusCache;
pub use workflow::{SubmitAssessment, VerificationWorkflow, DEFAULT_REFRESH_DELAY};
