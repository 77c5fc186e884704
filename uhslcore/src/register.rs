//! In-memory booking register.
//!
//! Holds every accepted booking for the lifetime of the process, in
//! insertion order, with no size limit and no persistence. The register is a
//! plain value with no interior locking: the hosting layer wraps it in
//! whatever lock it needs and must hold that lock across `submit` (or across
//! a manual check-then-insert pair) to keep submissions race-free.
//!
use crate::booking::Booking;

/// Outcome of submitting a booking to the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No conflict; the booking was appended to the register.
    Accepted,
    /// An existing booking already holds the same room/date/slot. The
    /// register was not modified.
    Conflict,
}

/// Insertion-ordered store of accepted bookings.
#[derive(Debug, Default)]
pub struct BookingRegister {
    /// Accepted bookings, oldest first.
    bookings: Vec<Booking>,
}

impl BookingRegister {
    /// Create an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the full register for a booking occupying the candidate's slot.
    ///
    /// Pure read, O(n), case-sensitive exact match on the composite key.
    /// Always false on an empty register.
    pub fn check_conflict(&self, candidate: &Booking) -> bool {
        self.bookings.iter().any(|b| b.same_slot(candidate))
    }

    /// Append a booking unconditionally.
    ///
    /// No conflict check happens here; callers that want conflict prevention
    /// go through [`BookingRegister::submit`] instead, which performs the
    /// check and the insert under a single mutable borrow.
    pub fn insert(&mut self, candidate: Booking) {
        self.bookings.push(candidate);
    }

    /// Check-then-insert as one operation.
    ///
    /// Returns [`SubmitOutcome::Conflict`] without mutating the register when
    /// the slot is taken, otherwise appends and returns
    /// [`SubmitOutcome::Accepted`].
    pub fn submit(&mut self, candidate: Booking) -> SubmitOutcome {
        if self.check_conflict(&candidate) {
            SubmitOutcome::Conflict
        } else {
            self.insert(candidate);
            SubmitOutcome::Accepted
        }
    }

    /// Number of bookings currently stored.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// True when no booking has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// All accepted bookings, oldest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}
