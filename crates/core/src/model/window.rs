//! Availability window models.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A talent-declared interval of being available for work.
///
/// `end_time = None` means open-ended; for overlap purposes an open end is
/// treated as extending to the maximum representable instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub id: DbId,
    pub talent_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl AvailabilityWindow {
    /// Whether this window has been soft-deleted by the store.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// DTO for creating a new availability window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWindow {
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
}

/// DTO for editing an existing availability window.
///
/// `talent_id` is immutable after creation, so it is absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWindow {
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
}
