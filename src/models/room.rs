//! Room model.
//!
//! Rooms are the fixed pool of exam venues for a run. A room seats at most
//! `capacity` students per window and can be reused in any number of
//! non-overlapping windows.

use serde::{Deserialize, Serialize};

/// An exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    #[serde(rename = "roomId")]
    pub id: String,
    /// Human-readable name.
    #[serde(rename = "roomName", default)]
    pub name: String,
    /// Seats available per window.
    pub capacity: u32,
    /// Operational status. Only [`RoomStatus::Available`] rooms are used.
    #[serde(default)]
    pub status: RoomStatus,
}

/// Room operational status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Room may host exams.
    #[default]
    Available,
    /// Room is out of service (renovation, closed, etc.).
    Unavailable,
    /// Any status string the scheduler does not recognize.
    #[serde(other)]
    Unknown,
}

impl Room {
    /// Creates an available room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            status: RoomStatus::Available,
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the room may be considered for packing at all.
    #[inline]
    pub fn is_in_service(&self) -> bool {
        self.status == RoomStatus::Available
    }
}
