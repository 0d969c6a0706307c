//! Command handlers
//!
//! One handler per state-changing use case. Each orchestrates the
//! repository ports, drives the aggregate, persists, then publishes the
//! returned domain event.

pub mod approve_late_arrival;
pub mod check_in;
pub mod check_out;
pub mod reject_late_arrival;
pub mod remove_attendance;

pub use approve_late_arrival::ApproveLateArrivalHandler;
pub use check_in::CheckInHandler;
pub use check_out::CheckOutHandler;
pub use reject_late_arrival::RejectLateArrivalHandler;
pub use remove_attendance::RemoveAttendanceHandler;
