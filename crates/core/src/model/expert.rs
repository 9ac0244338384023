//! Expert directory models.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// An expert authorized to assess skill groups they are assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    pub id: DbId,
    pub display_name: String,
    pub email: Option<String>,
    pub deleted_at: Option<Timestamp>,
}

impl Expert {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// One skill-group assignment of an expert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertSkillGroup {
    pub skill_group_id: DbId,
}
