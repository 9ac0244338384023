//! The verification workflow: assessment submission, invalidation, history,
//! and status refresh.
//!
//! All state of record lives in the remote store; this orchestrator enforces
//! the submission preconditions, keeps the advisory status cache in step,
//! and never attempts distributed locking — "most recent assessment wins"
//! ordering belongs to the store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crewline_core::model::{CreateAssessment, SkillGroupAssessment, VerificationStatus};
use crewline_core::roles::Actor;
use crewline_core::types::DbId;
use crewline_core::verification::{build_snapshot, missing_mandatory_skills, validate_note};
use crewline_store::{AssessmentStore, ExpertDirectory, SkillDirectory, StoreError};

use crate::eligibility::EligibilityResolver;
use crate::error::WorkflowError;
use crate::status_cache::VerificationStatusCache;

/// Pause before the post-mutation status refresh, tolerating store-side
/// eventual consistency. Best-effort: callers can always re-run
/// [`VerificationWorkflow::refresh_statuses`] if the store lagged longer.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(400);

/// Input for recording a new assessment.
#[derive(Debug, Clone)]
pub struct SubmitAssessment {
    pub talent_id: DbId,
    pub skill_group_id: DbId,
    pub expert_id: DbId,
    /// Pass/fail outcome.
    pub is_verified: bool,
    pub note: Option<String>,
}

/// Orchestrates the skill-group verification state machine per
/// (talent, skill group) pair.
#[derive(Clone)]
pub struct VerificationWorkflow {
    skills: Arc<dyn SkillDirectory>,
    resolver: EligibilityResolver,
    assessments: Arc<dyn AssessmentStore>,
    cache: Arc<VerificationStatusCache>,
    refresh_delay: Duration,
}

impl VerificationWorkflow {
    pub fn new(
        skills: Arc<dyn SkillDirectory>,
        experts: Arc<dyn ExpertDirectory>,
        assessments: Arc<dyn AssessmentStore>,
        cache: Arc<VerificationStatusCache>,
    ) -> Self {
        Self {
            skills,
            resolver: EligibilityResolver::new(experts),
            assessments,
            cache,
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }

    /// Override the post-mutation refresh delay (tests use a short one).
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Record a new assessment for a (talent, skill group) pair.
    ///
    /// Preconditions, in order: the actor may edit the talent; at least one
    /// eligible expert exists; the chosen expert is among them; a failed
    /// assessment carries a non-blank note; a passing assessment finds every
    /// mandatory skill of the group on the talent's profile.
    ///
    /// On success the store deactivates the previously active assessment in
    /// the same write, and a delayed fire-and-forget cache refresh is
    /// spawned — the user-visible result does not wait for it.
    pub async fn submit(
        &self,
        actor: &Actor,
        input: SubmitAssessment,
    ) -> Result<SkillGroupAssessment, WorkflowError> {
        if !actor.can_edit_talent(input.talent_id) {
            return Err(WorkflowError::Forbidden(
                "Cannot record assessments for another talent".into(),
            ));
        }

        let eligible = self
            .resolver
            .list_eligible_experts(input.skill_group_id)
            .await?;
        if eligible.is_empty() {
            return Err(WorkflowError::NoExpertAssigned {
                skill_group_id: input.skill_group_id,
            });
        }
        let expert = eligible
            .iter()
            .find(|e| e.id == input.expert_id)
            .ok_or(WorkflowError::ExpertNotEligible {
                expert_id: input.expert_id,
                skill_group_id: input.skill_group_id,
            })?;

        validate_note(input.note.as_deref())?;
        let note_is_blank = input
            .note
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty();
        if !input.is_verified && note_is_blank {
            return Err(WorkflowError::NoteRequiredOnFail);
        }

        let talent_skills = self.skills.list_skills(input.talent_id, true).await?;

        if input.is_verified {
            let groups = self.skills.list_skill_groups(true).await?;
            let group = groups
                .iter()
                .find(|g| g.id == input.skill_group_id)
                .ok_or(StoreError::NotFound {
                    entity: "SkillGroup",
                    id: input.skill_group_id,
                })?;

            let missing = missing_mandatory_skills(group, &talent_skills);
            if !missing.is_empty() {
                return Err(WorkflowError::MissingMandatorySkills(missing));
            }
        }

        let snapshot = build_snapshot(&talent_skills, input.skill_group_id);
        let verified_skill_ids = if input.is_verified {
            snapshot.iter().map(|entry| entry.skill_id).collect()
        } else {
            Vec::new()
        };

        let created = self
            .assessments
            .create_assessment(&CreateAssessment {
                talent_id: input.talent_id,
                skill_group_id: input.skill_group_id,
                expert_id: Some(expert.id),
                verified_by_name: expert.display_name.clone(),
                assessment_date: Utc::now(),
                is_verified: input.is_verified,
                note: input.note,
                skill_snapshot: snapshot,
                verified_skill_ids,
            })
            .await?;

        tracing::info!(
            assessment_id = created.id,
            talent_id = created.talent_id,
            skill_group_id = created.skill_group_id,
            expert_id = input.expert_id,
            is_verified = created.is_verified,
            "Assessment recorded",
        );

        self.spawn_refresh(input.talent_id, vec![input.skill_group_id]);
        Ok(created)
    }

    /// Manually deactivate the active assessment for a pair.
    ///
    /// The pair reverts toward `NoAssessment` until a new submission; the
    /// deactivated row stays in the audit history.
    pub async fn invalidate(
        &self,
        actor: &Actor,
        talent_id: DbId,
        skill_group_id: DbId,
        reason: Option<String>,
    ) -> Result<(), WorkflowError> {
        if !actor.can_edit_talent(talent_id) {
            return Err(WorkflowError::Forbidden(
                "Cannot invalidate assessments for another talent".into(),
            ));
        }

        validate_note(reason.as_deref())?;

        let latest = self
            .assessments
            .get_latest_assessment(talent_id, skill_group_id)
            .await?;
        let is_active = latest
            .as_ref()
            .is_some_and(|a| a.is_active && !a.is_deleted());
        if !is_active {
            return Err(WorkflowError::NoActiveAssessment {
                talent_id,
                skill_group_id,
            });
        }

        self.assessments
            .invalidate_assessment(talent_id, skill_group_id, reason.as_deref())
            .await?;

        tracing::info!(
            talent_id,
            skill_group_id,
            reason = reason.as_deref().unwrap_or(""),
            "Assessment invalidated",
        );

        // The cached entry is now known-wrong; drop it immediately, then
        // let the delayed refresh repopulate from the store.
        self.cache.invalidate_entry(talent_id, skill_group_id).await;
        self.spawn_refresh(talent_id, vec![skill_group_id]);
        Ok(())
    }

    /// Full audit history for a pair, newest first, soft-deleted rows
    /// excluded. Read-only.
    pub async fn get_history(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Vec<SkillGroupAssessment>, WorkflowError> {
        let mut history = self
            .assessments
            .get_history(talent_id, skill_group_id)
            .await?;
        history.retain(|a| !a.is_deleted());
        history.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(history)
    }

    /// Bulk recompute of derived statuses from the authoritative store.
    ///
    /// Groups the store answered for are cached and returned; groups absent
    /// from the answer keep their stale cache entry (returned as-is) rather
    /// than being discarded — stale beats silently wrong-and-empty. A
    /// wholesale fetch failure leaves the cache untouched and propagates:
    /// "status unknown, retry".
    pub async fn refresh_statuses(
        &self,
        talent_id: DbId,
        skill_group_ids: &[DbId],
    ) -> Result<HashMap<DbId, VerificationStatus>, WorkflowError> {
        let result =
            refresh_into_cache(&*self.assessments, &self.cache, talent_id, skill_group_ids)
                .await?;
        Ok(result)
    }

    /// Detached post-mutation refresh: wait out store-side eventual
    /// consistency, then recompute. Failures are logged, never surfaced —
    /// the mutation already succeeded and readers re-fetch on demand.
    fn spawn_refresh(&self, talent_id: DbId, skill_group_ids: Vec<DbId>) {
        let assessments = Arc::clone(&self.assessments);
        let cache = Arc::clone(&self.cache);
        let delay = self.refresh_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) =
                refresh_into_cache(&*assessments, &cache, talent_id, &skill_group_ids).await
            {
                tracing::warn!(
                    talent_id,
                    error = %e,
                    "Post-mutation status refresh failed; cache left stale",
                );
            }
        });
    }
}

/// Fetch statuses for the given groups and fold them into the cache.
async fn refresh_into_cache(
    assessments: &dyn AssessmentStore,
    cache: &VerificationStatusCache,
    talent_id: DbId,
    skill_group_ids: &[DbId],
) -> Result<HashMap<DbId, VerificationStatus>, StoreError> {
    let fetched = assessments.get_statuses(talent_id, skill_group_ids).await?;

    let mut result = HashMap::new();
    for status in fetched {
        cache.insert(status.clone()).await;
        result.insert(status.skill_group_id, status);
    }

    for &group_id in skill_group_ids {
        if result.contains_key(&group_id) {
            continue;
        }
        match cache.get(talent_id, group_id).await {
            Some(stale) => {
                tracing::warn!(
                    talent_id,
                    skill_group_id = group_id,
                    "Store omitted status for group; keeping stale cache entry",
                );
                result.insert(group_id, stale);
            }
            None => {
                tracing::warn!(
                    talent_id,
                    skill_group_id = group_id,
                    "Store omitted status for group and no cached entry exists",
                );
            }
        }
    }

    Ok(result)
}
