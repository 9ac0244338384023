//! Talent skill and skill group models.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A single skill on a talent's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: DbId,
    pub talent_id: DbId,
    pub skill_group_id: DbId,
    pub name: String,
    /// Self-assessed proficiency level (1-5).
    pub level: i16,
    pub years_exp: f32,
    /// Whether this skill is mandatory within its group.
    pub is_mandatory: bool,
    pub deleted_at: Option<Timestamp>,
}

impl Skill {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A named set of skills assessed together as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: DbId,
    pub name: String,
    /// Names of the skills that must be present on a talent's profile
    /// before a passing assessment can be recorded.
    pub mandatory_skill_names: Vec<String>,
    pub deleted_at: Option<Timestamp>,
}
