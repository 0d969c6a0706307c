//! Attendance repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Attendance;
use crate::domain::values::{AttendanceId, EmployeeId, OutletId};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn save(&self, attendance: Attendance) -> DomainResult<()>;
    async fn find_by_id(&self, id: AttendanceId) -> DomainResult<Option<Attendance>>;

    /// The employee's attendance on the given calendar day, if any.
    async fn find_today_attendance(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> DomainResult<Option<Attendance>>;

    /// Duplicate-checkin pre-check. Not linearizable with `save`; the
    /// storage layer must carry a uniqueness constraint on
    /// (employee, work date) independently.
    async fn exists_for_employee_on_date(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> DomainResult<bool>;

    /// Range query with storage-level pagination, ordered by check-in time.
    async fn find_by_outlet_and_date_range(
        &self,
        outlet_id: OutletId,
        start: NaiveDate,
        end: NaiveDate,
        pagination: PaginationParams,
    ) -> DomainResult<PaginatedResult<Attendance>>;

    async fn find_by_employee_and_date_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Attendance>>;

    async fn update(&self, attendance: Attendance) -> DomainResult<()>;

    /// Soft removal; the record stays but is marked inactive.
    async fn remove(&self, id: AttendanceId) -> DomainResult<()>;

    async fn next_id(&self) -> DomainResult<AttendanceId>;
}
