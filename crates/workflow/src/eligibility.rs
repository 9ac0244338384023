//! Expert eligibility resolution.
//!
//! An expert is eligible for a skill group iff their directory assignment
//! lists that group. The roster is small and fetched only when a
//! verification flow opens, so the per-expert assignment lookup (an N+1
//! over the remote store) is acceptable; a bulk experts-by-group query can
//! replace it behind this same interface if rosters grow.

use std::sync::Arc;

use crewline_core::model::Expert;
use crewline_core::types::DbId;
use crewline_store::{ExpertDirectory, StoreError};

/// Resolves which experts may assess a given skill group.
#[derive(Clone)]
pub struct EligibilityResolver {
    experts: Arc<dyn ExpertDirectory>,
}

impl EligibilityResolver {
    pub fn new(experts: Arc<dyn ExpertDirectory>) -> Self {
        Self { experts }
    }

    /// All non-deleted experts assigned to `skill_group_id`.
    ///
    /// A failed assignment lookup excludes that expert and logs a warning
    /// rather than failing the listing — one bad directory record must not
    /// block verification entirely. A failed roster fetch is fatal.
    pub async fn list_eligible_experts(
        &self,
        skill_group_id: DbId,
    ) -> Result<Vec<Expert>, StoreError> {
        let roster = self.experts.list_experts(true).await?;

        let mut eligible = Vec::new();
        for expert in roster {
            match self.experts.get_expert_skill_groups(expert.id).await {
                Ok(groups) => {
                    if groups.iter().any(|g| g.skill_group_id == skill_group_id) {
                        eligible.push(expert);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        expert_id = expert.id,
                        skill_group_id,
                        error = %e,
                        "Excluding expert after failed skill-group lookup",
                    );
                }
            }
        }

        Ok(eligible)
    }
}
