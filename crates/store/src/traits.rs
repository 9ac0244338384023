//! Collaborator contracts for the remote authoritative store.
//!
//! The workflow layer holds these as `Arc<dyn …>` so tests can substitute
//! in-memory fakes and a future bulk-query store can slot in without
//! touching callers. All listings honor `exclude_deleted` at the store,
//! not client-side.

use async_trait::async_trait;
use crewline_core::model::{
    AvailabilityWindow, CreateAssessment, CreateWindow, Expert, ExpertSkillGroup, Skill,
    SkillGroup, SkillGroupAssessment, UpdateWindow, VerificationStatus,
};
use crewline_core::types::DbId;

use crate::error::StoreError;

/// Talent skill and skill-group listings.
#[async_trait]
pub trait SkillDirectory: Send + Sync {
    async fn list_skills(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<Skill>, StoreError>;

    async fn list_skill_groups(&self, exclude_deleted: bool)
        -> Result<Vec<SkillGroup>, StoreError>;
}

/// Expert roster and per-expert group assignments.
#[async_trait]
pub trait ExpertDirectory: Send + Sync {
    async fn list_experts(&self, exclude_deleted: bool) -> Result<Vec<Expert>, StoreError>;

    async fn get_expert_skill_groups(
        &self,
        expert_id: DbId,
    ) -> Result<Vec<ExpertSkillGroup>, StoreError>;
}

/// Availability window storage.
#[async_trait]
pub trait WindowStore: Send + Sync {
    async fn list_windows(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<AvailabilityWindow>, StoreError>;

    async fn create_window(
        &self,
        talent_id: DbId,
        input: &CreateWindow,
    ) -> Result<AvailabilityWindow, StoreError>;

    async fn update_window(
        &self,
        window_id: DbId,
        input: &UpdateWindow,
    ) -> Result<AvailabilityWindow, StoreError>;

    /// Soft-delete; the row stays in the store with `deleted_at` set.
    async fn delete_window(&self, window_id: DbId) -> Result<(), StoreError>;
}

/// Append-only assessment storage and derived status queries.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Create a new active assessment. The store deactivates the previously
    /// active row for the same (talent, skill group) pair in the same write.
    async fn create_assessment(
        &self,
        input: &CreateAssessment,
    ) -> Result<SkillGroupAssessment, StoreError>;

    async fn get_assessment(&self, id: DbId) -> Result<SkillGroupAssessment, StoreError>;

    /// Most recently created assessment for the pair, active or not.
    async fn get_latest_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Option<SkillGroupAssessment>, StoreError>;

    /// Authoritative derived statuses for the given groups. Groups the
    /// store could not compute are simply absent from the result.
    async fn get_statuses(
        &self,
        talent_id: DbId,
        skill_group_ids: &[DbId],
    ) -> Result<Vec<VerificationStatus>, StoreError>;

    async fn invalidate_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
        reason: Option<&str>,
    ) -> Result<(), StoreError>;

    /// All non-soft-deleted assessments for the pair.
    async fn get_history(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Vec<SkillGroupAssessment>, StoreError>;
}
