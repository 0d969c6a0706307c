//! Late-arrival rejection command handler

use std::sync::Arc;

use tracing::info;

use crate::application::dto::{AttendanceResult, RejectLateArrivalCommand};
use crate::domain::{
    AttendanceId, AttendanceRepository, DomainError, DomainResult, EmployeeId,
};
use crate::notifications::SharedEventBus;

pub struct RejectLateArrivalHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
    event_bus: SharedEventBus,
}

impl RejectLateArrivalHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>, event_bus: SharedEventBus) -> Self {
        Self {
            attendance_repo,
            event_bus,
        }
    }

    pub async fn handle(
        &self,
        command: RejectLateArrivalCommand,
    ) -> DomainResult<AttendanceResult> {
        let attendance_id = AttendanceId::new(command.attendance_id)?;
        let approver_id = EmployeeId::new(command.approver_id)?;

        let mut attendance = self
            .attendance_repo
            .find_by_id(attendance_id)
            .await?
            .ok_or(DomainError::AttendanceNotFound(attendance_id))?;

        let event = attendance.reject_late_arrival(approver_id)?;

        self.attendance_repo.update(attendance.clone()).await?;
        self.event_bus.publish(event);

        info!(%attendance_id, %approver_id, "Late arrival rejected");

        Ok(AttendanceResult::from_attendance(&attendance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ApproveLateArrivalCommand;
    use crate::application::test_support::checked_in_env;
    use crate::domain::{AttendanceStatus, LateApprovalStatus};

    fn reject_command(attendance_id: i64) -> RejectLateArrivalCommand {
        RejectLateArrivalCommand {
            attendance_id,
            approver_id: 42,
        }
    }

    #[tokio::test]
    async fn rejecting_late_arrival_keeps_late_status() {
        let env = checked_in_env(9, 31).await;
        let handler = env.reject_handler();

        let result = handler.handle(reject_command(1)).await.unwrap();
        assert_eq!(
            result.late_approval_status,
            Some(LateApprovalStatus::Rejected)
        );
        assert_eq!(result.status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn rejecting_publishes_one_event() {
        let env = checked_in_env(9, 31).await;
        let mut subscriber = env.event_bus.subscribe();
        let handler = env.reject_handler();

        handler.handle(reject_command(1)).await.unwrap();

        let msg = tokio::time::timeout(std::time::Duration::from_millis(100), subscriber.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.event.event_type(), "late_arrival_rejected");
    }

    #[tokio::test]
    async fn decision_is_terminal_across_handlers() {
        let env = checked_in_env(9, 31).await;

        env.reject_handler().handle(reject_command(1)).await.unwrap();

        let err = env
            .approve_handler()
            .handle(ApproveLateArrivalCommand {
                attendance_id: 1,
                approver_id: 42,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_LATE_APPROVAL");
    }
}
