use crewline_core::error::CoreError;
use crewline_core::types::DbId;
use crewline_store::StoreError;

/// A verification workflow precondition or transport failure.
///
/// Precondition variants carry enough context for the caller to render
/// specific guidance (which expert, which skills); transport failures pass
/// through as [`WorkflowError::Store`] for a generic retry affordance.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("No expert is assigned to skill group {skill_group_id}")]
    NoExpertAssigned { skill_group_id: DbId },

    #[error("Expert {expert_id} is not eligible to assess skill group {skill_group_id}")]
    ExpertNotEligible { expert_id: DbId, skill_group_id: DbId },

    #[error("A note is required when recording a failed assessment")]
    NoteRequiredOnFail,

    #[error("Talent is missing mandatory skills: {}", .0.join(", "))]
    MissingMandatorySkills(Vec<String>),

    #[error("No active assessment exists for talent {talent_id} in skill group {skill_group_id}")]
    NoActiveAssessment { talent_id: DbId, skill_group_id: DbId },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
