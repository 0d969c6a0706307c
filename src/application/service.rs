//! Attendance application service — facade over the handlers
//!
//! Transport adapters hold one of these and call a method per use case.
//! All wiring of repositories and the event bus happens once, here.

use std::sync::Arc;

use crate::application::commands::{
    ApproveLateArrivalHandler, CheckInHandler, CheckOutHandler, RejectLateArrivalHandler,
    RemoveAttendanceHandler,
};
use crate::application::dto::{
    ApproveLateArrivalCommand, AttendanceResult, CheckinCommand, CheckoutCommand,
    GetAttendanceDetailsQuery, GetEmployeeAttendancesQuery, GetOutletAttendancesQuery,
    GetTodayAttendanceQuery, RejectLateArrivalCommand, RemoveAttendanceCommand,
};
use crate::application::queries::{
    GetAttendanceDetailsHandler, GetEmployeeAttendancesHandler, GetOutletAttendancesHandler,
    GetTodayAttendanceHandler,
};
use crate::domain::{
    AttendanceRepository, DomainResult, EmployeeRepository, ScheduleRepository,
};
use crate::notifications::SharedEventBus;
use crate::shared::PaginatedResult;

pub struct AttendanceService {
    check_in_handler: CheckInHandler,
    check_out_handler: CheckOutHandler,
    approve_handler: ApproveLateArrivalHandler,
    reject_handler: RejectLateArrivalHandler,
    remove_handler: RemoveAttendanceHandler,
    today_attendance_handler: GetTodayAttendanceHandler,
    attendance_details_handler: GetAttendanceDetailsHandler,
    outlet_attendances_handler: GetOutletAttendancesHandler,
    employee_attendances_handler: GetEmployeeAttendancesHandler,
}

impl AttendanceService {
    pub fn new(
        attendance_repo: Arc<dyn AttendanceRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        event_bus: SharedEventBus,
    ) -> Self {
        Self {
            check_in_handler: CheckInHandler::new(
                attendance_repo.clone(),
                employee_repo,
                schedule_repo,
                event_bus.clone(),
            ),
            check_out_handler: CheckOutHandler::new(attendance_repo.clone(), event_bus.clone()),
            approve_handler: ApproveLateArrivalHandler::new(
                attendance_repo.clone(),
                event_bus.clone(),
            ),
            reject_handler: RejectLateArrivalHandler::new(attendance_repo.clone(), event_bus),
            remove_handler: RemoveAttendanceHandler::new(attendance_repo.clone()),
            today_attendance_handler: GetTodayAttendanceHandler::new(attendance_repo.clone()),
            attendance_details_handler: GetAttendanceDetailsHandler::new(attendance_repo.clone()),
            outlet_attendances_handler: GetOutletAttendancesHandler::new(attendance_repo.clone()),
            employee_attendances_handler: GetEmployeeAttendancesHandler::new(attendance_repo),
        }
    }

    // ── Commands ────────────────────────────────────────────────

    pub async fn check_in(&self, command: CheckinCommand) -> DomainResult<AttendanceResult> {
        self.check_in_handler.handle(command).await
    }

    pub async fn check_out(&self, command: CheckoutCommand) -> DomainResult<AttendanceResult> {
        self.check_out_handler.handle(command).await
    }

    pub async fn approve_late_arrival(
        &self,
        command: ApproveLateArrivalCommand,
    ) -> DomainResult<AttendanceResult> {
        self.approve_handler.handle(command).await
    }

    pub async fn reject_late_arrival(
        &self,
        command: RejectLateArrivalCommand,
    ) -> DomainResult<AttendanceResult> {
        self.reject_handler.handle(command).await
    }

    pub async fn remove_attendance(&self, command: RemoveAttendanceCommand) -> DomainResult<()> {
        self.remove_handler.handle(command).await
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn today_attendance(
        &self,
        query: GetTodayAttendanceQuery,
    ) -> DomainResult<Option<AttendanceResult>> {
        self.today_attendance_handler.handle(query).await
    }

    pub async fn attendance_details(
        &self,
        query: GetAttendanceDetailsQuery,
    ) -> DomainResult<AttendanceResult> {
        self.attendance_details_handler.handle(query).await
    }

    pub async fn outlet_attendances(
        &self,
        query: GetOutletAttendancesQuery,
    ) -> DomainResult<PaginatedResult<AttendanceResult>> {
        self.outlet_attendances_handler.handle(query).await
    }

    pub async fn employee_attendances(
        &self,
        query: GetEmployeeAttendancesQuery,
    ) -> DomainResult<Vec<AttendanceResult>> {
        self.employee_attendances_handler.handle(query).await
    }
}
