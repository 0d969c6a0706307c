//! Late-arrival approval command handler

use std::sync::Arc;

use tracing::info;

use crate::application::dto::{ApproveLateArrivalCommand, AttendanceResult};
use crate::domain::{
    AttendanceId, AttendanceRepository, DomainError, DomainResult, EmployeeId,
};
use crate::notifications::SharedEventBus;

pub struct ApproveLateArrivalHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
    event_bus: SharedEventBus,
}

impl ApproveLateArrivalHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>, event_bus: SharedEventBus) -> Self {
        Self {
            attendance_repo,
            event_bus,
        }
    }

    pub async fn handle(
        &self,
        command: ApproveLateArrivalCommand,
    ) -> DomainResult<AttendanceResult> {
        let attendance_id = AttendanceId::new(command.attendance_id)?;
        let approver_id = EmployeeId::new(command.approver_id)?;

        let mut attendance = self
            .attendance_repo
            .find_by_id(attendance_id)
            .await?
            .ok_or(DomainError::AttendanceNotFound(attendance_id))?;

        let event = attendance.approve_late_arrival(approver_id)?;

        self.attendance_repo.update(attendance.clone()).await?;
        self.event_bus.publish(event);

        info!(%attendance_id, %approver_id, "Late arrival approved");

        Ok(AttendanceResult::from_attendance(&attendance))
    }
}
