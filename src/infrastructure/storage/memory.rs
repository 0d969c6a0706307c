//! In-memory storage implementation
//!
//! DashMap-backed implementations of the repository ports for development
//! and testing. Unlike a real database adapter, these enforce no
//! (employee, work date) uniqueness constraint beyond the handler's
//! pre-check, and outlet assignments are date-independent fixtures.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use dashmap::DashMap;

use crate::domain::{
    Attendance, AttendanceId, AttendanceRepository, DomainError, DomainResult, Employee,
    EmployeeId, EmployeeRepository, OutletId, ScheduleRepository, WorkSchedule,
};
use crate::shared::{PaginatedResult, PaginationParams};

/// In-memory attendance repository
pub struct InMemoryAttendanceRepository {
    records: DashMap<i64, Attendance>,
    id_counter: AtomicI64,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            id_counter: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted_by_checkin(&self, mut items: Vec<Attendance>) -> Vec<Attendance> {
        items.sort_by_key(|a| a.checkin.checkin_time);
        items
    }
}

impl Default for InMemoryAttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn save(&self, attendance: Attendance) -> DomainResult<()> {
        if self.records.contains_key(&attendance.id.value()) {
            return Err(DomainError::Storage(format!(
                "attendance {} already saved",
                attendance.id
            )));
        }
        self.records.insert(attendance.id.value(), attendance);
        Ok(())
    }

    async fn find_by_id(&self, id: AttendanceId) -> DomainResult<Option<Attendance>> {
        Ok(self.records.get(&id.value()).map(|a| a.clone()))
    }

    async fn find_today_attendance(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> DomainResult<Option<Attendance>> {
        Ok(self
            .records
            .iter()
            .find(|e| {
                let a = e.value();
                a.employee_id == employee_id && a.work_date == date && a.is_active
            })
            .map(|e| e.value().clone()))
    }

    async fn exists_for_employee_on_date(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> DomainResult<bool> {
        Ok(self.records.iter().any(|e| {
            let a = e.value();
            a.employee_id == employee_id && a.work_date == date
        }))
    }

    async fn find_by_outlet_and_date_range(
        &self,
        outlet_id: OutletId,
        start: NaiveDate,
        end: NaiveDate,
        pagination: PaginationParams,
    ) -> DomainResult<PaginatedResult<Attendance>> {
        let matching: Vec<Attendance> = self
            .records
            .iter()
            .filter(|e| {
                let a = e.value();
                a.outlet_id == outlet_id && a.work_date >= start && a.work_date <= end
            })
            .map(|e| e.value().clone())
            .collect();
        let total = matching.len() as u64;

        let page_items: Vec<Attendance> = self
            .sorted_by_checkin(matching)
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit as usize)
            .collect();

        Ok(PaginatedResult::new(
            page_items,
            total,
            pagination.page,
            pagination.limit,
        ))
    }

    async fn find_by_employee_and_date_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Attendance>> {
        let matching: Vec<Attendance> = self
            .records
            .iter()
            .filter(|e| {
                let a = e.value();
                a.employee_id == employee_id && a.work_date >= start && a.work_date <= end
            })
            .map(|e| e.value().clone())
            .collect();
        Ok(self.sorted_by_checkin(matching))
    }

    async fn update(&self, attendance: Attendance) -> DomainResult<()> {
        if !self.records.contains_key(&attendance.id.value()) {
            return Err(DomainError::AttendanceNotFound(attendance.id));
        }
        self.records.insert(attendance.id.value(), attendance);
        Ok(())
    }

    async fn remove(&self, id: AttendanceId) -> DomainResult<()> {
        let mut entry = self
            .records
            .get_mut(&id.value())
            .ok_or(DomainError::AttendanceNotFound(id))?;
        entry.mark_inactive();
        Ok(())
    }

    async fn next_id(&self) -> DomainResult<AttendanceId> {
        let value = self.id_counter.fetch_add(1, Ordering::SeqCst);
        AttendanceId::new(value)
    }
}

/// In-memory employee repository with explicit assignment fixtures
pub struct InMemoryEmployeeRepository {
    employees: DashMap<i64, Employee>,
    /// (employee, outlet) assignment links
    assignments: DashMap<(i64, i64), ()>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: DashMap::new(),
            assignments: DashMap::new(),
        }
    }

    pub fn add_employee(&self, employee: Employee) {
        self.employees.insert(employee.id.value(), employee);
    }

    pub fn assign(&self, employee_id: EmployeeId, outlet_id: OutletId) {
        self.assignments
            .insert((employee_id.value(), outlet_id.value()), ());
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> DomainResult<Option<Employee>> {
        Ok(self.employees.get(&id.value()).map(|e| e.clone()))
    }

    async fn is_employee_assigned_to_outlet(
        &self,
        employee_id: EmployeeId,
        outlet_id: OutletId,
        _date: NaiveDate,
    ) -> DomainResult<bool> {
        Ok(self
            .assignments
            .contains_key(&(employee_id.value(), outlet_id.value())))
    }

    async fn find_scheduled_employee_by_user_id(
        &self,
        user_id: i64,
        _date: NaiveDate,
    ) -> DomainResult<Option<Employee>> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.value().user_id == Some(user_id) && e.value().is_active)
            .map(|e| e.value().clone()))
    }

    async fn find_employees_assigned_to_outlet(
        &self,
        outlet_id: OutletId,
        _date: NaiveDate,
    ) -> DomainResult<Vec<Employee>> {
        let mut assigned: Vec<Employee> = self
            .employees
            .iter()
            .filter(|e| {
                self.assignments
                    .contains_key(&(e.value().id.value(), outlet_id.value()))
            })
            .map(|e| e.value().clone())
            .collect();
        assigned.sort_by_key(|e| e.id);
        Ok(assigned)
    }
}

/// In-memory schedule repository
pub struct InMemoryScheduleRepository {
    schedules: DashMap<(i64, Weekday), WorkSchedule>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self {
            schedules: DashMap::new(),
        }
    }

    pub fn add_schedule(&self, schedule: WorkSchedule) {
        self.schedules
            .insert((schedule.outlet_id.value(), schedule.day), schedule);
    }
}

impl Default for InMemoryScheduleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn find_by_outlet_and_day(
        &self,
        outlet_id: OutletId,
        day: Weekday,
    ) -> DomainResult<Option<WorkSchedule>> {
        Ok(self
            .schedules
            .get(&(outlet_id.value(), day))
            .map(|s| s.clone()))
    }

    async fn find_active_schedule_for_outlet(
        &self,
        outlet_id: OutletId,
        date: NaiveDate,
    ) -> DomainResult<Option<WorkSchedule>> {
        Ok(self
            .find_by_outlet_and_day(outlet_id, date.weekday())
            .await?
            .filter(|s| s.is_active))
    }
}

// ── Tests ──────────────────────────────────────────────────────
