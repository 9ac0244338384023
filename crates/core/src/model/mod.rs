//! Domain models exchanged with the remote authoritative store.
//!
//! Plain serde structs; the store assigns ids and owns persistence. Soft
//! deletion is uniformly a `deleted_at` timestamp — a populated value means
//! the row is dead to every listing that excludes deleted records.

pub mod assessment;
pub mod expert;
pub mod skill;
pub mod window;

pub use assessment::{
    CreateAssessment, SkillGroupAssessment, SkillSnapshotEntry, VerificationStatus,
};
pub use expert::{Expert, ExpertSkillGroup};
pub use skill::{Skill, SkillGroup};
pub use window::{AvailabilityWindow, CreateWindow, UpdateWindow};
