use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single room-booking request submitted through the web form.
///
/// This struct is deserialized straight from the submitted payload (form or
/// JSON). The three named fields form the composite key used for conflict
/// detection; every other field the caller sends rides along in `extra`
/// untouched and unvalidated.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Requested room identifier (e.g., "Lab A", "study-room-2").
    pub room_type: String,
    /// Requested date, kept as the raw submitted string. No parsing and no
    /// format normalization: "2024-05-01" and "2024-5-1" are different dates
    /// as far as conflict detection is concerned.
    pub booking_date: String,
    /// Requested time slot identifier (e.g., "09:00").
    pub time_slot: String,
    /// Any additional attributes the caller submitted (name, email, notes...).
    /// Carried through opaquely; never inspected by the register.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Booking {
    /// Build a booking from just its composite key, with no extra fields.
    pub fn new(
        room_type: impl Into<String>,
        booking_date: impl Into<String>,
        time_slot: impl Into<String>,
    ) -> Self {
        Self {
            room_type: room_type.into(),
            booking_date: booking_date.into(),
            time_slot: time_slot.into(),
            extra: HashMap::new(),
        }
    }

    /// Exact, case-sensitive equality on `(roomType, bookingDate, timeSlot)`.
    /// `extra` fields never participate.
    pub fn same_slot(&self, other: &Booking) -> bool {
        self.room_type == other.room_type
            && self.booking_date == other.booking_date
            && self.time_slot == other.time_slot
    }
}
