//! Pure skill-group verification logic.
//!
//! The workflow layer orchestrates remote calls; everything here is a pure
//! function over in-memory data so the state machine and the completeness
//! rules stay independently testable.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{Skill, SkillGroup, SkillGroupAssessment, SkillSnapshotEntry, VerificationStatus};
use crate::types::DbId;

/// Tolerance when comparing years-of-experience values from the store.
const YEARS_EPSILON: f32 = 1e-3;

/// Maximum length for an assessment note or invalidation reason.
pub const MAX_NOTE_LENGTH: usize = 10_000;

/// Cap free-text notes before sending them to the store.
pub fn validate_note(note: Option<&str>) -> Result<(), CoreError> {
    match note {
        Some(n) if n.len() > MAX_NOTE_LENGTH => Err(CoreError::Validation(format!(
            "Note exceeds maximum length of {MAX_NOTE_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

/// Verification state of a (talent, skill group) pair.
///
/// `Invalidated` is transitional: it marks a latest assessment that was
/// manually deactivated, and the pair behaves as `NoAssessment` until a new
/// submission arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    NoAssessment,
    Verified,
    Failed,
    NeedsReverification,
    Invalidated,
}

/// Derive the state of a pair from its latest assessment (active or not)
/// and the re-derived reverification flag.
pub fn derive_state(
    latest: Option<&SkillGroupAssessment>,
    needs_reverification: bool,
) -> VerificationState {
    match latest {
        None => VerificationState::NoAssessment,
        Some(a) if !a.is_active => VerificationState::Invalidated,
        Some(a) if !a.is_verified => VerificationState::Failed,
        Some(_) if needs_reverification => VerificationState::NeedsReverification,
        Some(_) => VerificationState::Verified,
    }
}

/// Names of the group's mandatory skills that are absent from the talent's
/// current (non-deleted) skills in that group.
///
/// Order follows the group's declaration so error messages are stable.
/// Name comparison is ASCII case-insensitive; skill names come from two
/// differently-curated store tables.
pub fn missing_mandatory_skills(group: &SkillGroup, talent_skills: &[Skill]) -> Vec<String> {
    group
        .mandatory_skill_names
        .iter()
        .filter(|required| {
            !talent_skills.iter().any(|s| {
                !s.is_deleted()
                    && s.skill_group_id == group.id
                    && s.name.eq_ignore_ascii_case(required)
            })
        })
        .cloned()
        .collect()
}

/// Freeze the talent's current non-deleted skills in a group into snapshot
/// entries for a new assessment.
pub fn build_snapshot(talent_skills: &[Skill], skill_group_id: DbId) -> Vec<SkillSnapshotEntry> {
    talent_skills
        .iter()
        .filter(|s| !s.is_deleted() && s.skill_group_id == skill_group_id)
        .map(|s| SkillSnapshotEntry {
            skill_id: s.id,
            skill_name: s.name.clone(),
            level: s.level,
            years_exp: s.years_exp,
        })
        .collect()
}

/// Re-derive the verification status of a pair from its active assessment
/// and the talent's current skills.
///
/// A passing assessment whose snapshot no longer matches the current skill
/// rows (level change, experience change, or removal) reports
/// `needs_reverification = true` with the first drift as the reason.
pub fn status_from_assessment(
    talent_id: DbId,
    skill_group_id: DbId,
    active: Option<&SkillGroupAssessment>,
    current_skills: &[Skill],
) -> VerificationStatus {
    let mut status = VerificationStatus {
        talent_id,
        skill_group_id,
        is_verified: false,
        last_verified_date: None,
        last_verified_by_expert_id: None,
        last_verified_by_name: None,
        needs_reverification: false,
        reason: None,
    };

    let Some(assessment) = active else {
        return status;
    };

    status.last_verified_date = Some(assessment.assessment_date);
    status.last_verified_by_expert_id = assessment.expert_id;
    status.last_verified_by_name = Some(assessment.verified_by_name.clone());

    if !assessment.is_verified {
        status.reason = assessment.note.clone();
        return status;
    }

    status.is_verified = true;
    if let Some(drift) = first_skill_drift(&assessment.skill_snapshot, current_skills) {
        status.needs_reverification = true;
        status.reason = Some(drift);
    }
    status
}

/// First snapshot entry whose current skill row changed or vanished, as a
/// human-readable reason; `None` when the snapshot still matches.
fn first_skill_drift(snapshot: &[SkillSnapshotEntry], current_skills: &[Skill]) -> Option<String> {
    for entry in snapshot {
        let current = current_skills
            .iter()
            .find(|s| s.id == entry.skill_id && !s.is_deleted());

        let Some(current) = current else {
            return Some(format!(
                "Skill '{}' was removed since verification",
                entry.skill_name
            ));
        };

        if current.level != entry.level {
            return Some(format!(
                "Skill '{}' level changed from {} to {} since verification",
                entry.skill_name, entry.level, current.level
            ));
        }

        if (current.years_exp - entry.years_exp).abs() > YEARS_EPSILON {
            return Some(format!(
                "Skill '{}' experience changed since verification",
                entry.skill_name
            ));
        }
    }
    None
}
