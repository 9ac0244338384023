//! Interval validation for availability windows.
//!
//! Pure functions over caller-supplied data; nothing here touches the store.
//! Windows are half-open `[start, end)` intervals: a window ending exactly
//! when another starts does not overlap it. An absent end extends to
//! [`OPEN_END`].

use chrono::{DateTime, Months, Utc};

use crate::model::AvailabilityWindow;
use crate::types::{DbId, Timestamp};

/// How far into the future a window may start or extend past its start.
pub const MAX_LEAD_MONTHS: u32 = 6;

/// Sentinel end instant for open-ended windows.
pub const OPEN_END: Timestamp = DateTime::<Utc>::MAX_UTC;

/// A window's effective end for overlap purposes.
fn effective_end(end: Option<Timestamp>) -> Timestamp {
    end.unwrap_or(OPEN_END)
}

/// `now` plus the scheduling horizon, saturating at [`OPEN_END`].
fn horizon(from: Timestamp) -> Timestamp {
    from.checked_add_months(Months::new(MAX_LEAD_MONTHS))
        .unwrap_or(OPEN_END)
}

/// A window may not start in the past nor more than six months out.
pub fn validate_start(candidate_start: Timestamp, now: Timestamp) -> bool {
    candidate_start >= now && candidate_start <= horizon(now)
}

/// An end, when present, must be strictly after the start and at most six
/// months past it. An absent end (open-ended window) is always valid.
pub fn validate_end(start: Timestamp, end: Option<Timestamp>) -> bool {
    match end {
        None => true,
        Some(end) => end > start && end <= horizon(start),
    }
}

/// Find the first existing window that overlaps the candidate interval.
///
/// Soft-deleted windows and the window whose id equals `exclude_id` (the
/// window being edited) are skipped. "First" follows the caller-supplied
/// order of `existing`; callers that need the earliest conflicting window
/// must pre-sort by `start_time`.
pub fn find_overlap<'a>(
    existing: &'a [AvailabilityWindow],
    candidate_start: Timestamp,
    candidate_end: Option<Timestamp>,
    exclude_id: Option<DbId>,
) -> Option<&'a AvailabilityWindow> {
    let candidate_end = effective_end(candidate_end);

    existing.iter().find(|w| {
        if w.is_deleted() || Some(w.id) == exclude_id {
            return false;
        }
        let other_end = effective_end(w.end_time);
        candidate_start < other_end && w.start_time < candidate_end
    })
}

/// A window validation failure, carrying enough context to render guidance.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WindowValidationError {
    #[error("Start time must be between now and {MAX_LEAD_MONTHS} months from now")]
    StartOutOfRange,

    #[error("End time must be after the start time")]
    EndBeforeStart,

    #[error("End time must be within {MAX_LEAD_MONTHS} months of the start time")]
    EndTooFarFromStart,

    #[error("Window overlaps an existing availability window (id {})", .0.id)]
    OverlapConflict(AvailabilityWindow),
}

/// Run the full rule set for a candidate window against the talent's
/// existing windows.
pub fn validate_window(
    existing: &[AvailabilityWindow],
    candidate_start: Timestamp,
    candidate_end: Option<Timestamp>,
    exclude_id: Option<DbId>,
    now: Timestamp,
) -> Result<(), WindowValidationError> {
    if !validate_start(candidate_start, now) {
        return Err(WindowValidationError::StartOutOfRange);
    }
    if let Some(end) = candidate_end {
        if end <= candidate_start {
            return Err(WindowValidationError::EndBeforeStart);
        }
        if end > horizon(candidate_start) {
            return Err(WindowValidationError::EndTooFarFromStart);
        }
    }
    if let Some(conflict) = find_overlap(existing, candidate_start, candidate_end, exclude_id) {
        return Err(WindowValidationError::OverlapConflict(conflict.clone()));
    }
    Ok(())
}
