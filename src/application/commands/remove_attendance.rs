//! Attendance removal command handler

use std::sync::Arc;

use tracing::info;

use crate::application::dto::RemoveAttendanceCommand;
use crate::domain::{AttendanceId, AttendanceRepository, DomainError, DomainResult};

/// Soft-deletes an attendance record
///
/// Records are never physically deleted; removal marks the record inactive
/// and its derived status becomes Absent. No event is raised.
pub struct RemoveAttendanceHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl RemoveAttendanceHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    pub async fn handle(&self, command: RemoveAttendanceCommand) -> DomainResult<()> {
        let attendance_id = AttendanceId::new(command.attendance_id)?;

        self.attendance_repo
            .find_by_id(attendance_id)
            .await?
            .ok_or(DomainError::AttendanceNotFound(attendance_id))?;

        self.attendance_repo.remove(attendance_id).await?;

        info!(%attendance_id, "Attendance removed (soft)");
        Ok(())
    }
}
