//! Check-out command handler

use std::sync::Arc;

use tracing::info;

use crate::application::dto::{AttendanceResult, CheckoutCommand};
use crate::domain::{
    AttendanceRepository, DomainError, DomainResult, EmployeeId, ImageProof,
};
use crate::notifications::SharedEventBus;

/// Handles employee check-out against the day's open attendance record
pub struct CheckOutHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
    event_bus: SharedEventBus,
}

impl CheckOutHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>, event_bus: SharedEventBus) -> Self {
        Self {
            attendance_repo,
            event_bus,
        }
    }

    pub async fn handle(&self, command: CheckoutCommand) -> DomainResult<AttendanceResult> {
        let employee_id = EmployeeId::new(command.employee_id)?;
        let proof = ImageProof::new(command.image_proof_path)?;
        let date = command.checkout_time.date_naive();

        let mut attendance = self
            .attendance_repo
            .find_today_attendance(employee_id, date)
            .await?
            .ok_or(DomainError::NoCheckinRecord { employee_id })?;

        let event = attendance.checkout(command.checkout_time, proof)?;

        self.attendance_repo.update(attendance.clone()).await?;
        self.event_bus.publish(event);

        info!(
            attendance_id = %attendance.id,
            %employee_id,
            working_minutes = attendance.working_hours()?.value(),
            "Employee checked out"
        );

        Ok(AttendanceResult::from_attendance(&attendance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{checked_in_env, TestEnv};
    use chrono::{TimeZone, Utc};

    fn checkout_command(at_hour: u32, at_minute: u32) -> CheckoutCommand {
        CheckoutCommand {
            employee_id: 7,
            checkout_time: Utc
                .with_ymd_and_hms(2024, 3, 1, at_hour, at_minute, 0)
                .unwrap(),
            image_proof_path: "uploads/out.jpg".into(),
        }
    }

    #[tokio::test]
    async fn checkout_completes_the_day() {
        let env = checked_in_env(9, 0).await;
        let handler = env.check_out_handler();

        let result = handler.handle(checkout_command(17, 30)).await.unwrap();
        assert_eq!(result.working_minutes, Some(510));
        assert_eq!(result.working_hours.as_deref(), Some("8 hours 30 minutes"));
        assert!(result.checkout_time.is_some());
    }

    #[tokio::test]
    async fn checkout_publishes_completion_event() {
        let env = checked_in_env(9, 0).await;
        let mut subscriber = env.event_bus.subscribe();
        let handler = env.check_out_handler();

        handler.handle(checkout_command(17, 0)).await.unwrap();

        let msg = tokio::time::timeout(std::time::Duration::from_millis(100), subscriber.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.event.event_type(), "attendance_completed");
    }

    #[tokio::test]
    async fn checkout_without_checkin_fails() {
        let env = TestEnv::new();
        let handler = env.check_out_handler();

        let err = handler.handle(checkout_command(17, 0)).await.unwrap_err();
        assert_eq!(err.code(), "NO_CHECKIN_RECORD");
    }

    #[tokio::test]
    async fn double_checkout_fails() {
        let env = checked_in_env(9, 0).await;
        let handler = env.check_out_handler();

        handler.handle(checkout_command(17, 0)).await.unwrap();
        let err = handler.handle(checkout_command(18, 0)).await.unwrap_err();
        assert_eq!(err.code(), "ALREADY_CHECKED_OUT");
    }

    #[tokio::test]
    async fn backwards_checkout_fails_and_record_stays_open() {
        let env = checked_in_env(9, 0).await;
        let handler = env.check_out_handler();

        let err = handler.handle(checkout_command(8, 0)).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_CHECKOUT_TIME");

        // The failed checkout must not have been persisted.
        let again = handler.handle(checkout_command(17, 0)).await.unwrap();
        assert_eq!(again.working_minutes, Some(480));
    }
}
