//! Employee attendances range query handler

use std::sync::Arc;

use crate::application::dto::{AttendanceResult, GetEmployeeAttendancesQuery};
use crate::domain::{AttendanceRepository, DomainResult, EmployeeId};

pub struct GetEmployeeAttendancesHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl GetEmployeeAttendancesHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    pub async fn handle(
        &self,
        query: GetEmployeeAttendancesQuery,
    ) -> DomainResult<Vec<AttendanceResult>> {
        let employee_id = EmployeeId::new(query.employee_id)?;
        let attendances = self
            .attendance_repo
            .find_by_employee_and_date_range(employee_id, query.start_date, query.end_date)
            .await?;
        Ok(attendances
            .iter()
            .map(AttendanceResult::from_attendance)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::env_with_week_of_attendances;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn returns_employee_history_in_range() {
        let env = env_with_week_of_attendances().await;
        let handler = env.employee_attendances_handler();

        let results = handler
            .handle(GetEmployeeAttendancesQuery {
                employee_id: 7,
                start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.employee_id == 7));
    }
}
