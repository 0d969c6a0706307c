//! Attendance aggregate
//!
//! Contains the Attendance aggregate root, its detail value objects, and
//! the repository interface.

pub mod model;
pub mod repository;

pub use model::{
    Attendance, AttendanceStatus, CheckinDetails, CheckoutDetails, LateApprovalStatus,
};
pub use repository::AttendanceRepository;
