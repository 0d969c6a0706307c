//! Query handlers
//!
//! Pure reads through the attendance repository port. No special
//! concurrency guarantees beyond what the repository provides
//! (assume read-committed).

pub mod attendance_details;
pub mod employee_attendances;
pub mod outlet_attendances;
pub mod today_attendance;

pub use attendance_details::GetAttendanceDetailsHandler;
pub use employee_attendances::GetEmployeeAttendancesHandler;
pub use outlet_attendances::GetOutletAttendancesHandler;
pub use today_attendance::GetTodayAttendanceHandler;
