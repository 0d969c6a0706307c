//! Application DTOs
//!
//! Commands, queries and the flattened result the transport layer consumes.
//! Commands carry raw primitives; handlers validate them into domain value
//! types, so a transport adapter never constructs domain objects itself.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Attendance, AttendanceStatus, LateApprovalStatus};

// ── Commands ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinCommand {
    pub employee_id: i64,
    pub outlet_id: i64,
    pub checkin_time: DateTime<Utc>,
    pub image_proof_path: String,
    pub late_notes: Option<String>,
    pub late_present_proof_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutCommand {
    pub employee_id: i64,
    pub checkout_time: DateTime<Utc>,
    pub image_proof_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveLateArrivalCommand {
    pub attendance_id: i64,
    pub approver_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectLateArrivalCommand {
    pub attendance_id: i64,
    pub approver_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveAttendanceCommand {
    pub attendance_id: i64,
}

// ── Queries ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTodayAttendanceQuery {
    pub employee_id: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAttendanceDetailsQuery {
    pub attendance_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOutletAttendancesQuery {
    pub outlet_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEmployeeAttendancesQuery {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// ── Results ────────────────────────────────────────────────────

/// Flattened attendance record for the transport layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResult {
    pub id: i64,
    pub employee_id: i64,
    pub outlet_id: i64,
    pub checkin_time: DateTime<Utc>,
    pub lateness_minutes: u32,
    pub status: AttendanceStatus,
    pub is_active: bool,
    pub checkout_time: Option<DateTime<Utc>>,
    pub working_minutes: Option<u32>,
    /// Human-readable working time, e.g. "8 hours 30 minutes"
    pub working_hours: Option<String>,
    /// Present only when the check-in was late
    pub late_approval_status: Option<LateApprovalStatus>,
}

impl AttendanceResult {
    pub fn from_attendance(attendance: &Attendance) -> Self {
        let working = attendance.working_hours().ok();
        Self {
            id: attendance.id.value(),
            employee_id: attendance.employee_id.value(),
            outlet_id: attendance.outlet_id.value(),
            checkin_time: attendance.checkin.checkin_time,
            lateness_minutes: attendance.checkin.lateness.value(),
            status: attendance.status(),
            is_active: attendance.is_active,
            checkout_time: attendance.checkout.as_ref().map(|c| c.checkout_time),
            working_minutes: working.map(|m| m.value()),
            working_hours: working.map(|m| m.to_hours_and_minutes()),
            late_approval_status: attendance
                .checkin
                .is_late()
                .then_some(attendance.checkin.approval_status),
        }
    }
}

impl From<&Attendance> for AttendanceResult {
    fn from(attendance: &Attendance) -> Self {
        Self::from_attendance(attendance)
    }
}
