//! Attendance details query handler

use std::sync::Arc;

use crate::application::dto::{AttendanceResult, GetAttendanceDetailsQuery};
use crate::domain::{AttendanceId, AttendanceRepository, DomainError, DomainResult};

pub struct GetAttendanceDetailsHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl GetAttendanceDetailsHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    pub async fn handle(
        &self,
        query: GetAttendanceDetailsQuery,
    ) -> DomainResult<AttendanceResult> {
        let attendance_id = AttendanceId::new(query.attendance_id)?;
        let attendance = self
            .attendance_repo
            .find_by_id(attendance_id)
            .await?
            .ok_or(DomainError::AttendanceNotFound(attendance_id))?;
        Ok(AttendanceResult::from_attendance(&attendance))
    }
}
