//! Skill-group assessment and derived verification status models.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// One skill as it looked at assessment time.
///
/// Snapshots make the assessment audit-stable: the talent's live skill rows
/// can change afterwards without rewriting history, and status re-derivation
/// compares current rows against this frozen copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSnapshotEntry {
    pub skill_id: DbId,
    pub skill_name: String,
    pub level: i16,
    pub years_exp: f32,
}

/// A single verification event for a (talent, skill group) pair.
///
/// Append-only: rows are deactivated or soft-deleted, never physically
/// removed. At most one row per pair has `is_active = true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroupAssessment {
    pub id: DbId,
    pub talent_id: DbId,
    pub skill_group_id: DbId,
    /// Absent when only a free-text verifier name was recorded.
    pub expert_id: Option<DbId>,
    pub verified_by_name: String,
    pub assessment_date: Timestamp,
    /// Pass/fail outcome of the assessment.
    pub is_verified: bool,
    pub note: Option<String>,
    pub skill_snapshot: Vec<SkillSnapshotEntry>,
    /// Skills actually attested; populated only on a passing assessment.
    pub verified_skill_ids: Vec<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl SkillGroupAssessment {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// DTO for recording a new assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssessment {
    pub talent_id: DbId,
    pub skill_group_id: DbId,
    pub expert_id: Option<DbId>,
    pub verified_by_name: String,
    pub assessment_date: Timestamp,
    pub is_verified: bool,
    pub note: Option<String>,
    pub skill_snapshot: Vec<SkillSnapshotEntry>,
    pub verified_skill_ids: Vec<DbId>,
}

/// Derived verification status for a (talent, skill group) pair.
///
/// Never persisted independently — always re-derivable from the active
/// assessment plus the talent's current skills. Cached copies are advisory
/// and may be stale until refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub talent_id: DbId,
    pub skill_group_id: DbId,
    pub is_verified: bool,
    pub last_verified_date: Option<Timestamp>,
    pub last_verified_by_expert_id: Option<DbId>,
    pub last_verified_by_name: Option<String>,
    pub needs_reverification: bool,
    pub reason: Option<String>,
}
