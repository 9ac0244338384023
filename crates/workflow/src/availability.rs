//! Availability window save path.
//!
//! Wraps the pure interval validator in `crewline-core` with the remote
//! round-trips around it: list the talent's current windows, validate the
//! candidate against them, then write. Existing windows are pre-sorted by
//! start time so a conflict always reports the earliest conflicting window.

use std::sync::Arc;

use chrono::Utc;

use crewline_core::availability::{validate_window, WindowValidationError};
use crewline_core::model::{AvailabilityWindow, CreateWindow, UpdateWindow};
use crewline_core::roles::Actor;
use crewline_core::types::DbId;
use crewline_store::{StoreError, WindowStore};

/// A window save failure: validation, authorization, or transport.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error(transparent)]
    Validation(#[from] WindowValidationError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Creates, edits, and soft-deletes availability windows.
#[derive(Clone)]
pub struct AvailabilityService {
    windows: Arc<dyn WindowStore>,
}

impl AvailabilityService {
    pub fn new(windows: Arc<dyn WindowStore>) -> Self {
        Self { windows }
    }

    fn authorize(actor: &Actor, talent_id: DbId) -> Result<(), AvailabilityError> {
        if actor.can_edit_talent(talent_id) {
            Ok(())
        } else {
            Err(AvailabilityError::Forbidden(
                "Cannot edit another talent's availability".into(),
            ))
        }
    }

    /// Existing non-deleted windows, sorted ascending by start time for
    /// deterministic conflict reporting.
    async fn sorted_windows(
        &self,
        talent_id: DbId,
    ) -> Result<Vec<AvailabilityWindow>, StoreError> {
        let mut existing = self.windows.list_windows(talent_id, true).await?;
        existing.sort_by_key(|w| w.start_time);
        Ok(existing)
    }

    /// Validate and create a new window for the talent.
    pub async fn create_window(
        &self,
        actor: &Actor,
        talent_id: DbId,
        input: CreateWindow,
    ) -> Result<AvailabilityWindow, AvailabilityError> {
        Self::authorize(actor, talent_id)?;

        let existing = self.sorted_windows(talent_id).await?;
        validate_window(&existing, input.start_time, input.end_time, None, Utc::now())?;

        let created = self.windows.create_window(talent_id, &input).await?;
        tracing::info!(
            window_id = created.id,
            talent_id,
            "Availability window created",
        );
        Ok(created)
    }

    /// Validate and apply an edit, excluding the edited window from the
    /// overlap search.
    pub async fn update_window(
        &self,
        actor: &Actor,
        window: &AvailabilityWindow,
        input: UpdateWindow,
    ) -> Result<AvailabilityWindow, AvailabilityError> {
        Self::authorize(actor, window.talent_id)?;

        let existing = self.sorted_windows(window.talent_id).await?;
        validate_window(
            &existing,
            input.start_time,
            input.end_time,
            Some(window.id),
            Utc::now(),
        )?;

        let updated = self.windows.update_window(window.id, &input).await?;
        tracing::info!(
            window_id = window.id,
            talent_id = window.talent_id,
            "Availability window updated",
        );
        Ok(updated)
    }

    /// Soft-delete a window.
    pub async fn delete_window(
        &self,
        actor: &Actor,
        window: &AvailabilityWindow,
    ) -> Result<(), AvailabilityError> {
        Self::authorize(actor, window.talent_id)?;
        self.windows.delete_window(window.id).await?;
        tracing::info!(
            window_id = window.id,
            talent_id = window.talent_id,
            "Availability window deleted",
        );
        Ok(())
    }
}
