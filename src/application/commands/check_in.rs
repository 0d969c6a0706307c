//! Check-in command handler

use std::sync::Arc;

use chrono::Datelike;
use tracing::info;

use crate::application::dto::{AttendanceResult, CheckinCommand};
use crate::domain::{
    Attendance, AttendanceRepository, DomainError, DomainResult, EmployeeId, EmployeeRepository,
    ImageProof, OutletId, ScheduleRepository,
};
use crate::notifications::SharedEventBus;

/// Handles employee check-in
///
/// Validation order: employee exists, employee is assigned to the outlet on
/// the check-in date, no attendance exists yet for that day, the outlet has
/// an active schedule. Only then is the aggregate built and persisted; the
/// creation event is published after the write returns.
///
/// The duplicate pre-check is not linearizable with `save`: two racing
/// check-ins can both pass it. The storage layer carries the
/// (employee, work date) uniqueness constraint.
pub struct CheckInHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    event_bus: SharedEventBus,
}

impl CheckInHandler {
    pub fn new(
        attendance_repo: Arc<dyn AttendanceRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        event_bus: SharedEventBus,
    ) -> Self {
        Self {
            attendance_repo,
            employee_repo,
            schedule_repo,
            event_bus,
        }
    }

    pub async fn handle(&self, command: CheckinCommand) -> DomainResult<AttendanceResult> {
        let employee_id = EmployeeId::new(command.employee_id)?;
        let outlet_id = OutletId::new(command.outlet_id)?;
        let proof = ImageProof::new(command.image_proof_path)?;
        let late_proof = command
            .late_present_proof_path
            .map(ImageProof::new)
            .transpose()?;
        let work_date = command.checkin_time.date_naive();

        let employee = self
            .employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee_id))?;

        let assigned = self
            .employee_repo
            .is_employee_assigned_to_outlet(employee_id, outlet_id, work_date)
            .await?;
        if !assigned {
            return Err(DomainError::EmployeeNotAssigned {
                employee_id,
                outlet_id,
            });
        }

        let exists = self
            .attendance_repo
            .exists_for_employee_on_date(employee_id, work_date)
            .await?;
        if exists {
            return Err(DomainError::AttendanceAlreadyExists {
                employee_id,
                date: work_date,
            });
        }

        let schedule = self
            .schedule_repo
            .find_active_schedule_for_outlet(outlet_id, work_date)
            .await?
            .ok_or(DomainError::NoScheduleFound {
                outlet_id,
                day: work_date.weekday(),
            })?;

        let id = self.attendance_repo.next_id().await?;
        let (attendance, event) = Attendance::create(
            id,
            employee_id,
            outlet_id,
            command.checkin_time,
            proof,
            schedule.scheduled_checkin_at(work_date),
            command.late_notes,
            late_proof,
        );

        self.attendance_repo.save(attendance.clone()).await?;
        self.event_bus.publish(event);

        info!(
            attendance_id = %id,
            %employee_id,
            %outlet_id,
            employee = %employee.full_name,
            lateness_minutes = attendance.checkin.lateness.value(),
            "Employee checked in"
        );

        Ok(AttendanceResult::from_attendance(&attendance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{checked_in_env, TestEnv};
    use crate::domain::AttendanceStatus;
    use chrono::{TimeZone, Utc};

    fn checkin_command(at_hour: u32, at_minute: u32) -> CheckinCommand {
        CheckinCommand {
            employee_id: 7,
            outlet_id: 3,
            checkin_time: Utc
                .with_ymd_and_hms(2024, 3, 1, at_hour, at_minute, 0)
                .unwrap(),
            image_proof_path: "uploads/in.jpg".into(),
            late_notes: None,
            late_present_proof_path: None,
        }
    }

    #[tokio::test]
    async fn on_time_checkin_succeeds() {
        let env = TestEnv::new();
        let handler = env.check_in_handler();

        let result = handler.handle(checkin_command(8, 55)).await.unwrap();
        assert_eq!(result.employee_id, 7);
        assert_eq!(result.lateness_minutes, 0);
        assert_eq!(result.status, AttendanceStatus::Present);
        assert!(result.late_approval_status.is_none());
        assert_eq!(env.attendance_count(), 1);
    }

    #[tokio::test]
    async fn late_checkin_computes_lateness_and_publishes() {
        let env = TestEnv::new();
        let mut subscriber = env.event_bus.subscribe();
        let handler = env.check_in_handler();

        let result = handler.handle(checkin_command(9, 31)).await.unwrap();
        assert_eq!(result.lateness_minutes, 31);
        assert_eq!(result.status, AttendanceStatus::Late);

        let msg = tokio::time::timeout(std::time::Duration::from_millis(100), subscriber.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.event.event_type(), "attendance_created");
    }

    #[tokio::test]
    async fn duplicate_checkin_fails_without_saving() {
        let env = checked_in_env(9, 0).await;
        let handler = env.check_in_handler();

        let err = handler.handle(checkin_command(10, 0)).await.unwrap_err();
        assert_eq!(err.code(), "ATTENDANCE_ALREADY_EXISTS");
        assert_eq!(env.attendance_count(), 1);
    }

    #[tokio::test]
    async fn missing_employee_fails() {
        let env = TestEnv::new();
        let handler = env.check_in_handler();

        let mut command = checkin_command(9, 0);
        command.employee_id = 99;
        let err = handler.handle(command).await.unwrap_err();
        assert_eq!(err.code(), "EMPLOYEE_NOT_FOUND");
        assert_eq!(env.attendance_count(), 0);
    }

    #[tokio::test]
    async fn unassigned_employee_fails() {
        let env = TestEnv::new();
        let handler = env.check_in_handler();

        let mut command = checkin_command(9, 0);
        command.outlet_id = 8; // outlet exists, employee 7 is not assigned there
        let err = handler.handle(command).await.unwrap_err();
        assert_eq!(err.code(), "EMPLOYEE_NOT_ASSIGNED");
    }

    #[tokio::test]
    async fn missing_schedule_fails_before_building_aggregate() {
        let env = TestEnv::without_schedule();
        let handler = env.check_in_handler();

        let err = handler.handle(checkin_command(9, 0)).await.unwrap_err();
        assert_eq!(err.code(), "NO_SCHEDULE_FOUND");
        assert_eq!(env.attendance_count(), 0);
    }

    #[tokio::test]
    async fn blank_proof_is_rejected() {
        let env = TestEnv::new();
        let handler = env.check_in_handler();

        let mut command = checkin_command(9, 0);
        command.image_proof_path = "  ".into();
        let err = handler.handle(command).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
