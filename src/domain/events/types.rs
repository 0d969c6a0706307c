//! Attendance domain events
//!
//! Immutable records stamped at construction. Events carry identifiers and
//! timestamps only, never full aggregate state; mutating aggregate
//! operations return them explicitly and handlers publish after the state
//! write commits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::{AttendanceId, EmployeeId, OutletId};

/// Event types for attendance notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AttendanceEvent {
    AttendanceCreated(AttendanceCreatedEvent),
    AttendanceCompleted(AttendanceCompletedEvent),
    LateArrivalApproved(LateArrivalApprovedEvent),
    LateArrivalRejected(LateArrivalRejectedEvent),
}

impl AttendanceEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AttendanceEvent::AttendanceCreated(_) => "attendance_created",
            AttendanceEvent::AttendanceCompleted(_) => "attendance_completed",
            AttendanceEvent::LateArrivalApproved(_) => "late_arrival_approved",
            AttendanceEvent::LateArrivalRejected(_) => "late_arrival_rejected",
        }
    }

    pub fn attendance_id(&self) -> AttendanceId {
        match self {
            AttendanceEvent::AttendanceCreated(e) => e.attendance_id,
            AttendanceEvent::AttendanceCompleted(e) => e.attendance_id,
            AttendanceEvent::LateArrivalApproved(e) => e.attendance_id,
            AttendanceEvent::LateArrivalRejected(e) => e.attendance_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AttendanceEvent::AttendanceCreated(e) => e.occurred_at,
            AttendanceEvent::AttendanceCompleted(e) => e.occurred_at,
            AttendanceEvent::LateArrivalApproved(e) => e.occurred_at,
            AttendanceEvent::LateArrivalRejected(e) => e.occurred_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreatedEvent {
    pub attendance_id: AttendanceId,
    pub employee_id: EmployeeId,
    pub outlet_id: OutletId,
    pub checkin_time: DateTime<Utc>,
    pub is_late: bool,
    pub occurred_at: DateTime<Utc>,
}

impl AttendanceCreatedEvent {
    pub fn new(
        attendance_id: AttendanceId,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        checkin_time: DateTime<Utc>,
        is_late: bool,
    ) -> Self {
        Self {
            attendance_id,
            employee_id,
            outlet_id,
            checkin_time,
            is_late,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCompletedEvent {
    pub attendance_id: AttendanceId,
    pub employee_id: EmployeeId,
    pub outlet_id: OutletId,
    pub checkin_time: DateTime<Utc>,
    pub checkout_time: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

impl AttendanceCompletedEvent {
    pub fn new(
        attendance_id: AttendanceId,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        checkin_time: DateTime<Utc>,
        checkout_time: DateTime<Utc>,
    ) -> Self {
        Self {
            attendance_id,
            employee_id,
            outlet_id,
            checkin_time,
            checkout_time,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateArrivalApprovedEvent {
    pub attendance_id: AttendanceId,
    pub employee_id: EmployeeId,
    pub approver_id: EmployeeId,
    pub occurred_at: DateTime<Utc>,
}

impl LateArrivalApprovedEvent {
    pub fn new(
        attendance_id: AttendanceId,
        employee_id: EmployeeId,
        approver_id: EmployeeId,
    ) -> Self {
        Self {
            attendance_id,
            employee_id,
            approver_id,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateArrivalRejectedEvent {
    pub attendance_id: AttendanceId,
    pub employee_id: EmployeeId,
    pub approver_id: EmployeeId,
    pub occurred_at: DateTime<Utc>,
}

impl LateArrivalRejectedEvent {
    pub fn new(
        attendance_id: AttendanceId,
        employee_id: EmployeeId,
        approver_id: EmployeeId,
    ) -> Self {
        Self {
            attendance_id,
            employee_id,
            approver_id,
            occurred_at: Utc::now(),
        }
    }
}

/// Wrapper for publishing events with delivery metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AttendanceEvent,
}

impl EventMessage {
    pub fn new(event: AttendanceEvent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}
