//! Well-known role name constants and the defensive authorization check.
//!
//! Real permission enforcement happens in the platform's permission layer
//! before the workflow is invoked; the checks here only catch callers that
//! bypass it.

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_TALENT: &str = "talent";

/// The authenticated principal on whose behalf a mutation runs.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: DbId,
    pub role: String,
    /// The talent record owned by this user, if any.
    pub talent_id: Option<DbId>,
    /// Talent records this user manages (relevant for `manager`).
    pub managed_talent_ids: Vec<DbId>,
}

impl Actor {
    /// Whether this actor may edit the given talent's record.
    ///
    /// Admins may edit anyone; managers may edit their managed talents;
    /// a talent may edit its own record.
    pub fn can_edit_talent(&self, talent_id: DbId) -> bool {
        if self.role == ROLE_ADMIN {
            return true;
        }
        if self.role == ROLE_MANAGER && self.managed_talent_ids.contains(&talent_id) {
            return true;
        }
        self.talent_id == Some(talent_id)
    }
}
