//! Application layer
//!
//! Command/query handlers orchestrating the domain aggregate against the
//! repository ports, and the service facade the transport layer talks to.

pub mod commands;
pub mod dto;
pub mod queries;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use commands::{
    ApproveLateArrivalHandler, CheckInHandler, CheckOutHandler, RejectLateArrivalHandler,
    RemoveAttendanceHandler,
};
pub use dto::{
    ApproveLateArrivalCommand, AttendanceResult, CheckinCommand, CheckoutCommand,
    GetAttendanceDetailsQuery, GetEmployeeAttendancesQuery, GetOutletAttendancesQuery,
    GetTodayAttendanceQuery, RejectLateArrivalCommand, RemoveAttendanceCommand,
};
pub use queries::{
    GetAttendanceDetailsHandler, GetEmployeeAttendancesHandler, GetOutletAttendancesHandler,
    GetTodayAttendanceHandler,
};
pub use service::AttendanceService;
