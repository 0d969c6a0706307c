//! Domain errors

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use thiserror::Error;

use super::values::{AttendanceId, EmployeeId, OutletId};

/// Domain-level error types
///
/// Every business-rule violation the attendance contract can produce.
/// All variants are deterministic and non-retriable; handlers never retry
/// them and callers map `code()` to a transport status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("attendance already exists for employee {employee_id} on {date}")]
    AttendanceAlreadyExists {
        employee_id: EmployeeId,
        date: NaiveDate,
    },

    #[error("attendance not found: {0}")]
    AttendanceNotFound(AttendanceId),

    #[error("attendance {0} is already checked out")]
    AlreadyCheckedOut(AttendanceId),

    #[error("no open check-in record for employee {employee_id}")]
    NoCheckinRecord { employee_id: EmployeeId },

    #[error("invalid checkout time {checkout} for check-in {checkin}")]
    InvalidCheckoutTime {
        checkin: DateTime<Utc>,
        checkout: DateTime<Utc>,
    },

    #[error("no active schedule for outlet {outlet_id} on {day}")]
    NoScheduleFound { outlet_id: OutletId, day: Weekday },

    #[error("invalid late approval: {0}")]
    InvalidLateApproval(String),

    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("employee {employee_id} is not assigned to outlet {outlet_id}")]
    EmployeeNotAssigned {
        employee_id: EmployeeId,
        outlet_id: OutletId,
    },

    #[error("validation: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Stable machine-readable code for transport-level status mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AttendanceAlreadyExists { .. } => "ATTENDANCE_ALREADY_EXISTS",
            Self::AttendanceNotFound(_) => "ATTENDANCE_NOT_FOUND",
            Self::AlreadyCheckedOut(_) => "ALREADY_CHECKED_OUT",
            Self::NoCheckinRecord { .. } => "NO_CHECKIN_RECORD",
            Self::InvalidCheckoutTime { .. } => "INVALID_CHECKOUT_TIME",
            Self::NoScheduleFound { .. } => "NO_SCHEDULE_FOUND",
            Self::InvalidLateApproval(_) => "INVALID_LATE_APPROVAL",
            Self::EmployeeNotFound(_) => "EMPLOYEE_NOT_FOUND",
            Self::EmployeeNotAssigned { .. } => "EMPLOYEE_NOT_ASSIGNED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
