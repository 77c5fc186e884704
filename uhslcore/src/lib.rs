//! UHSL Student Center booking domain crate.
//!
//! This crate contains the booking model and the in-memory register used by
//! the web component: the `Booking` record (`booking`) and the
//! `BookingRegister` with its conflict scan and submission logic
//! (`register`). These modules are intentionally minimal and hold no I/O or
//! HTTP concerns; the web crate owns locking and routing.
//!
/// Booking record and composite-key equality
pub mod booking;
/// In-memory register with conflict detection
pub mod register;

pub use booking::Booking;
pub use register::{BookingRegister, SubmitOutcome};
