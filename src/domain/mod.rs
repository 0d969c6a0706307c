pub mod attendance;
pub mod employee;
pub mod error;
pub mod events;
pub mod schedule;
pub mod values;

// Re-export commonly used types
pub use attendance::{
    Attendance, AttendanceRepository, AttendanceStatus, CheckinDetails, CheckoutDetails,
    LateApprovalStatus,
};
pub use employee::{Employee, EmployeeRepository};
pub use error::{DomainError, DomainResult};
pub use events::{AttendanceEvent, EventMessage};
pub use schedule::{ScheduleRepository, WorkSchedule};
pub use values::{AttendanceId, EmployeeId, ImageProof, Minutes, OutletId};
