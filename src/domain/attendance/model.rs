//! Attendance aggregate
//!
//! One employee's record of presence for a single workday: a check-in,
//! an optional check-out, and the late-arrival approval sub-state. All
//! mutation goes through the aggregate's methods; none of them touch
//! external state, so the whole lifecycle is unit-testable in isolation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::events::{
    AttendanceCompletedEvent, AttendanceCreatedEvent, AttendanceEvent, LateArrivalApprovedEvent,
    LateArrivalRejectedEvent,
};
use crate::domain::values::{AttendanceId, EmployeeId, ImageProof, Minutes, OutletId};
use crate::domain::{DomainError, DomainResult};

/// Supervisor decision on a late check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateApprovalStatus {
    /// Awaiting a supervisor decision
    Pending,
    /// Late arrival excused by a supervisor
    Approved,
    /// Late arrival rejected by a supervisor
    Rejected,
}

impl LateApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Approved" => Self::Approved,
            "Rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for LateApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived presence status, computed on read and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    /// Reserved for leave integration; never derived by `Attendance::status`
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Excused => "Excused",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything about the arrival event
///
/// Lateness is computed once at construction from the elapsed difference
/// between the actual and scheduled check-in instants, floored at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinDetails {
    pub checkin_time: DateTime<Utc>,
    pub proof: ImageProof,
    pub lateness: Minutes,
    pub approval_status: LateApprovalStatus,
    /// Employee's explanation for arriving late
    pub notes: Option<String>,
    /// Supporting proof for the lateness explanation
    pub late_proof: Option<ImageProof>,
}

impl CheckinDetails {
    pub fn new(
        checkin_time: DateTime<Utc>,
        proof: ImageProof,
        scheduled_time: DateTime<Utc>,
        notes: Option<String>,
        late_proof: Option<ImageProof>,
    ) -> Self {
        let lateness = Minutes::from_signed((checkin_time - scheduled_time).num_minutes());
        Self {
            checkin_time,
            proof,
            lateness,
            approval_status: LateApprovalStatus::Pending,
            notes,
            late_proof,
        }
    }

    pub fn is_late(&self) -> bool {
        !self.lateness.is_zero()
    }

    pub fn is_pending_late_approval(&self) -> bool {
        self.is_late() && self.approval_status == LateApprovalStatus::Pending
    }

    pub fn is_late_approved(&self) -> bool {
        self.is_late() && self.approval_status == LateApprovalStatus::Approved
    }

    /// Approve the late arrival. Only a pending late check-in may be
    /// approved; approvals are final.
    pub fn approve_late_arrival(&mut self) -> DomainResult<()> {
        self.transition_approval(LateApprovalStatus::Approved)
    }

    /// Reject the late arrival. Only a pending late check-in may be
    /// rejected; rejections are final.
    pub fn reject_late_arrival(&mut self) -> DomainResult<()> {
        self.transition_approval(LateApprovalStatus::Rejected)
    }

    fn transition_approval(&mut self, target: LateApprovalStatus) -> DomainResult<()> {
        if !self.is_late() {
            return Err(DomainError::InvalidLateApproval(
                "check-in is not late".into(),
            ));
        }
        match self.approval_status {
            LateApprovalStatus::Pending => {
                self.approval_status = target;
                Ok(())
            }
            decided => Err(DomainError::InvalidLateApproval(format!(
                "late arrival already {}",
                decided.as_str().to_lowercase()
            ))),
        }
    }
}

/// Everything about the departure event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub checkout_time: DateTime<Utc>,
    pub proof: ImageProof,
}

impl CheckoutDetails {
    pub fn new(checkout_time: DateTime<Utc>, proof: ImageProof) -> Self {
        Self {
            checkout_time,
            proof,
        }
    }

    /// Elapsed working time between check-in and this check-out.
    ///
    /// The checkout must fall on the same calendar day as the check-in and
    /// must not precede it.
    pub fn working_hours(&self, checkin: &CheckinDetails) -> DomainResult<Minutes> {
        if self.checkout_time.date_naive() != checkin.checkin_time.date_naive()
            || self.checkout_time < checkin.checkin_time
        {
            return Err(DomainError::InvalidCheckoutTime {
                checkin: checkin.checkin_time,
                checkout: self.checkout_time,
            });
        }
        Ok(Minutes::from_signed(
            (self.checkout_time - checkin.checkin_time).num_minutes(),
        ))
    }
}

/// Attendance aggregate root
///
/// The unit of consistency for one employee's workday. Lifecycle:
/// checked-in, then optionally checked-out; an orthogonal late-approval
/// sub-state on the check-in; and a one-way active flag used for soft
/// deletion. Mutating operations return the domain event they raise so the
/// caller can publish it after persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub outlet_id: OutletId,
    pub checkin: CheckinDetails,
    pub checkout: Option<CheckoutDetails>,
    /// Calendar day of the check-in, keys one-attendance-per-day uniqueness
    pub work_date: NaiveDate,
    pub is_active: bool,
}

impl Attendance {
    /// Check an employee in. The only creation path that raises an event.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: AttendanceId,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        checkin_time: DateTime<Utc>,
        proof: ImageProof,
        scheduled_time: DateTime<Utc>,
        notes: Option<String>,
        late_proof: Option<ImageProof>,
    ) -> (Self, AttendanceEvent) {
        let checkin = CheckinDetails::new(checkin_time, proof, scheduled_time, notes, late_proof);
        let is_late = checkin.is_late();
        let attendance = Self {
            id,
            employee_id,
            outlet_id,
            work_date: checkin_time.date_naive(),
            checkin,
            checkout: None,
            is_active: true,
        };
        let event = AttendanceEvent::AttendanceCreated(AttendanceCreatedEvent::new(
            id,
            employee_id,
            outlet_id,
            checkin_time,
            is_late,
        ));
        (attendance, event)
    }

    /// Rebuild from stored state. Raises nothing.
    pub fn from_persistence(
        id: AttendanceId,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        checkin: CheckinDetails,
        checkout: Option<CheckoutDetails>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            employee_id,
            outlet_id,
            work_date: checkin.checkin_time.date_naive(),
            checkin,
            checkout,
            is_active,
        }
    }

    /// Check the employee out.
    pub fn checkout(
        &mut self,
        checkout_time: DateTime<Utc>,
        proof: ImageProof,
    ) -> DomainResult<AttendanceEvent> {
        if self.checkout.is_some() {
            return Err(DomainError::AlreadyCheckedOut(self.id));
        }
        let details = CheckoutDetails::new(checkout_time, proof);
        // Same-day and ordering guard; the minutes value itself is derived
        // again on read.
        details.working_hours(&self.checkin)?;
        self.checkout = Some(details);
        Ok(AttendanceEvent::AttendanceCompleted(
            AttendanceCompletedEvent::new(
                self.id,
                self.employee_id,
                self.outlet_id,
                self.checkin.checkin_time,
                checkout_time,
            ),
        ))
    }

    pub fn approve_late_arrival(&mut self, approver_id: EmployeeId) -> DomainResult<AttendanceEvent> {
        self.checkin.approve_late_arrival()?;
        Ok(AttendanceEvent::LateArrivalApproved(
            LateArrivalApprovedEvent::new(self.id, self.employee_id, approver_id),
        ))
    }

    pub fn reject_late_arrival(&mut self, approver_id: EmployeeId) -> DomainResult<AttendanceEvent> {
        self.checkin.reject_late_arrival()?;
        Ok(AttendanceEvent::LateArrivalRejected(
            LateArrivalRejectedEvent::new(self.id, self.employee_id, approver_id),
        ))
    }

    /// Minutes worked between check-in and check-out.
    pub fn working_hours(&self) -> DomainResult<Minutes> {
        let checkout = self
            .checkout
            .as_ref()
            .ok_or(DomainError::NoCheckinRecord {
                employee_id: self.employee_id,
            })?;
        checkout.working_hours(&self.checkin)
    }

    pub fn is_checked_out(&self) -> bool {
        self.checkout.is_some()
    }

    /// Derived presence status. Idempotent read.
    pub fn status(&self) -> AttendanceStatus {
        if !self.is_active {
            AttendanceStatus::Absent
        } else if self.checkin.is_late() && !self.checkin.is_late_approved() {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }

    /// One-way soft delete. Raises nothing; the derived status becomes
    /// `Absent`.
    pub fn mark_inactive(&mut self) {
        self.is_active = false;
    }
}

// ── Tests ──────────────────────────────────────────────────────
