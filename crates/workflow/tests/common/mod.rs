//! In-memory fake of the remote authoritative store, with injectable
//! per-call failures.
//!
//! Mirrors the store-side behaviors the workflow relies on: surrogate id
//! assignment, single-active-assessment-per-pair on create, soft deletion,
//! and server-side status derivation (done here with the same pure core
//! functions the real store implements independently).

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crewline_core::model::{
    AvailabilityWindow, CreateAssessment, CreateWindow, Expert, ExpertSkillGroup, Skill,
    SkillGroup, SkillGroupAssessment, UpdateWindow, VerificationStatus,
};
use crewline_core::roles::{Actor, ROLE_ADMIN};
use crewline_core::types::DbId;
use crewline_core::verification::status_from_assessment;
use crewline_store::{AssessmentStore, ExpertDirectory, SkillDirectory, StoreError, WindowStore};

#[derive(Default)]
pub struct FakeState {
    pub skills: Vec<Skill>,
    pub skill_groups: Vec<SkillGroup>,
    pub experts: Vec<Expert>,
    /// expert id -> assigned skill group ids
    pub expert_groups: HashMap<DbId, Vec<DbId>>,
    pub windows: Vec<AvailabilityWindow>,
    pub assessments: Vec<SkillGroupAssessment>,
    next_id: DbId,

    // Failure injection.
    pub fail_expert_lookups: HashSet<DbId>,
    pub fail_status_fetch: bool,
    pub omit_status_groups: HashSet<DbId>,
}

impl FakeState {
    fn alloc_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub state: Mutex<FakeState>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().unwrap());
    }

    fn server_fault() -> StoreError {
        StoreError::Status {
            status: 500,
            message: "injected fault".to_string(),
        }
    }
}

#[async_trait]
impl SkillDirectory for FakeStore {
    async fn list_skills(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<Skill>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .skills
            .iter()
            .filter(|s| s.talent_id == talent_id && !(exclude_deleted && s.is_deleted()))
            .cloned()
            .collect())
    }

    async fn list_skill_groups(
        &self,
        exclude_deleted: bool,
    ) -> Result<Vec<SkillGroup>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .skill_groups
            .iter()
            .filter(|g| !(exclude_deleted && g.deleted_at.is_some()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ExpertDirectory for FakeStore {
    async fn list_experts(&self, exclude_deleted: bool) -> Result<Vec<Expert>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .experts
            .iter()
            .filter(|e| !(exclude_deleted && e.is_deleted()))
            .cloned()
            .collect())
    }

    async fn get_expert_skill_groups(
        &self,
        expert_id: DbId,
    ) -> Result<Vec<ExpertSkillGroup>, StoreError> {
        let state = self.state.lock().unwrap();
        if state.fail_expert_lookups.contains(&expert_id) {
            return Err(Self::server_fault());
        }
        Ok(state
            .expert_groups
            .get(&expert_id)
            .map(|groups| {
                groups
                    .iter()
                    .map(|&skill_group_id| ExpertSkillGroup { skill_group_id })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl WindowStore for FakeStore {
    async fn list_windows(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<AvailabilityWindow>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .windows
            .iter()
            .filter(|w| w.talent_id == talent_id && !(exclude_deleted && w.is_deleted()))
            .cloned()
            .collect())
    }

    async fn create_window(
        &self,
        talent_id: DbId,
        input: &CreateWindow,
    ) -> Result<AvailabilityWindow, StoreError> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let window = AvailabilityWindow {
            id: state.alloc_id(),
            talent_id,
            start_time: input.start_time,
            end_time: input.end_time,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        state.windows.push(window.clone());
        Ok(window)
    }

    async fn update_window(
        &self,
        window_id: DbId,
        input: &UpdateWindow,
    ) -> Result<AvailabilityWindow, StoreError> {
        let mut state = self.state.lock().unwrap();
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or(StoreError::NotFound {
                entity: "AvailabilityWindow",
                id: window_id,
            })?;
        window.start_time = input.start_time;
        window.end_time = input.end_time;
        window.notes = input.notes.clone();
        window.updated_at = Utc::now();
        Ok(window.clone())
    }

    async fn delete_window(&self, window_id: DbId) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or(StoreError::NotFound {
                entity: "AvailabilityWindow",
                id: window_id,
            })?;
        window.deleted_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl AssessmentStore for FakeStore {
    async fn create_assessment(
        &self,
        input: &CreateAssessment,
    ) -> Result<SkillGroupAssessment, StoreError> {
        let mut state = self.state.lock().unwrap();

        // Single-active invariant: the new row supersedes the prior one.
        for existing in state.assessments.iter_mut() {
            if existing.talent_id == input.talent_id
                && existing.skill_group_id == input.skill_group_id
            {
                existing.is_active = false;
            }
        }

        let now = Utc::now();
        let assessment = SkillGroupAssessment {
            id: state.alloc_id(),
            talent_id: input.talent_id,
            skill_group_id: input.skill_group_id,
            expert_id: input.expert_id,
            verified_by_name: input.verified_by_name.clone(),
            assessment_date: input.assessment_date,
            is_verified: input.is_verified,
            note: input.note.clone(),
            skill_snapshot: input.skill_snapshot.clone(),
            verified_skill_ids: input.verified_skill_ids.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        state.assessments.push(assessment.clone());
        Ok(assessment)
    }

    async fn get_assessment(&self, id: DbId) -> Result<SkillGroupAssessment, StoreError> {
        let state = self.state.lock().unwrap();
        state
            .assessments
            .iter()
            .find(|a| a.id == id && !a.is_deleted())
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "Assessment",
                id,
            })
    }

    async fn get_latest_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Option<SkillGroupAssessment>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .assessments
            .iter()
            .filter(|a| {
                a.talent_id == talent_id && a.skill_group_id == skill_group_id && !a.is_deleted()
            })
            .max_by_key(|a| a.id)
            .cloned())
    }

    async fn get_statuses(
        &self,
        talent_id: DbId,
        skill_group_ids: &[DbId],
    ) -> Result<Vec<VerificationStatus>, StoreError> {
        let state = self.state.lock().unwrap();
        if state.fail_status_fetch {
            return Err(Self::server_fault());
        }

        let current_skills: Vec<Skill> = state
            .skills
            .iter()
            .filter(|s| s.talent_id == talent_id && !s.is_deleted())
            .cloned()
            .collect();

        Ok(skill_group_ids
            .iter()
            .filter(|g| !state.omit_status_groups.contains(g))
            .map(|&group_id| {
                let active = state
                    .assessments
                    .iter()
                    .find(|a| {
                        a.talent_id == talent_id
                            && a.skill_group_id == group_id
                            && a.is_active
                            && !a.is_deleted()
                    });
                status_from_assessment(talent_id, group_id, active, &current_skills)
            })
            .collect())
    }

    async fn invalidate_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
        _reason: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let active = state.assessments.iter_mut().find(|a| {
            a.talent_id == talent_id
                && a.skill_group_id == skill_group_id
                && a.is_active
                && !a.is_deleted()
        });
        match active {
            Some(a) => {
                a.is_active = false;
                a.updated_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::Status {
                status: 404,
                message: "no active assessment".to_string(),
            }),
        }
    }

    async fn get_history(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Vec<SkillGroupAssessment>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .assessments
            .iter()
            .filter(|a| {
                a.talent_id == talent_id && a.skill_group_id == skill_group_id && !a.is_deleted()
            })
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub const TALENT: DbId = 42;
pub const BACKEND_GROUP: DbId = 7;
pub const EXPERT_DANA: DbId = 3;

pub fn admin() -> Actor {
    Actor {
        user_id: 1,
        role: ROLE_ADMIN.to_string(),
        talent_id: None,
        managed_talent_ids: vec![],
    }
}

pub fn skill(id: DbId, talent_id: DbId, group_id: DbId, name: &str) -> Skill {
    Skill {
        id,
        talent_id,
        skill_group_id: group_id,
        name: name.to_string(),
        level: 3,
        years_exp: 4.0,
        is_mandatory: true,
        deleted_at: None,
    }
}

/// Skill group "Backend" with mandatory {SQL, REST}, expert Dana assigned
/// to it, and talent 42 holding only SQL.
pub fn seed_backend_scenario(store: &FakeStore) {
    store.with_state(|state| {
        state.skill_groups.push(SkillGroup {
            id: BACKEND_GROUP,
            name: "Backend".to_string(),
            mandatory_skill_names: vec!["SQL".to_string(), "REST".to_string()],
            deleted_at: None,
        });
        state.experts.push(Expert {
            id: EXPERT_DANA,
            display_name: "Dana".to_string(),
            email: None,
            deleted_at: None,
        });
        state.expert_groups.insert(EXPERT_DANA, vec![BACKEND_GROUP]);
        state.skills.push(skill(1, TALENT, BACKEND_GROUP, "SQL"));
    });
}
