//! Value types
//!
//! Strongly-typed identifiers, durations and evidence references shared by
//! the attendance aggregate and the application layer.

pub mod ids;
pub mod image_proof;
pub mod minutes;

pub use ids::{AttendanceId, EmployeeId, OutletId};
pub use image_proof::ImageProof;
pub use minutes::Minutes;
