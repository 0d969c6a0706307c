//! Today's attendance query handler

use std::sync::Arc;

use crate::application::dto::{AttendanceResult, GetTodayAttendanceQuery};
use crate::domain::{AttendanceRepository, DomainResult, EmployeeId};

pub struct GetTodayAttendanceHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl GetTodayAttendanceHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    pub async fn handle(
        &self,
        query: GetTodayAttendanceQuery,
    ) -> DomainResult<Option<AttendanceResult>> {
        let employee_id = EmployeeId::new(query.employee_id)?;
        let attendance = self
            .attendance_repo
            .find_today_attendance(employee_id, query.date)
            .await?;
        Ok(attendance.as_ref().map(AttendanceResult::from_attendance))
    }
}
