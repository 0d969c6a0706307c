//! Employee repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Employee;
use crate::domain::values::{EmployeeId, OutletId};
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: EmployeeId) -> DomainResult<Option<Employee>>;

    /// Whether the employee is assigned to the outlet on the given date.
    async fn is_employee_assigned_to_outlet(
        &self,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        date: NaiveDate,
    ) -> DomainResult<bool>;

    async fn find_scheduled_employee_by_user_id(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> DomainResult<Option<Employee>>;

    async fn find_employees_assigned_to_outlet(
        &self,
        outlet_id: OutletId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Employee>>;
}
