//! Domain events
//!
//! Event types that represent facts about what happened to an attendance
//! record. The broadcast bus that delivers them lives in `notifications`.

pub mod types;

// Re-export all event types
pub use types::{
    AttendanceCompletedEvent, AttendanceCreatedEvent, AttendanceEvent, EventMessage,
    LateArrivalApprovedEvent, LateArrivalRejectedEvent,
};
