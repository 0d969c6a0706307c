//! Shared fixtures for handler tests

use std::sync::Arc;

use chrono::{NaiveTime, TimeZone, Utc, Weekday};

use crate::application::commands::{
    ApproveLateArrivalHandler, CheckInHandler, CheckOutHandler, RejectLateArrivalHandler,
    RemoveAttendanceHandler,
};
use crate::application::dto::CheckinCommand;
use crate::application::queries::{
    GetAttendanceDetailsHandler, GetEmployeeAttendancesHandler, GetOutletAttendancesHandler,
    GetTodayAttendanceHandler,
};
use crate::application::service::AttendanceService;
use crate::domain::{Attendance, Employee, EmployeeId, OutletId, WorkSchedule};
use crate::infrastructure::storage::{
    InMemoryAttendanceRepository, InMemoryEmployeeRepository, InMemoryScheduleRepository,
};
use crate::notifications::{create_event_bus, SharedEventBus};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// In-memory wiring of every port plus the event bus.
///
/// Seeds employee 7 ("Sari Dewi", user 70) assigned to outlet 3, a second
/// outlet 8 with a schedule but no assignment, and 09:00-17:30 schedules
/// for every weekday.
pub struct TestEnv {
    pub attendance_repo: Arc<InMemoryAttendanceRepository>,
    pub employee_repo: Arc<InMemoryEmployeeRepository>,
    pub schedule_repo: Arc<InMemoryScheduleRepository>,
    pub event_bus: SharedEventBus,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self::without_schedule();
        for outlet in [3, 8] {
            let outlet_id = OutletId::new(outlet).unwrap();
            for day in ALL_DAYS {
                env.schedule_repo.add_schedule(WorkSchedule::new(
                    outlet_id,
                    day,
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
                ));
            }
        }
        env
    }

    pub fn without_schedule() -> Self {
        let employee_repo = Arc::new(InMemoryEmployeeRepository::new());
        let employee_id = EmployeeId::new(7).unwrap();
        employee_repo.add_employee(Employee::new(employee_id, "Sari Dewi").with_user_id(70));
        employee_repo.assign(employee_id, OutletId::new(3).unwrap());

        Self {
            attendance_repo: Arc::new(InMemoryAttendanceRepository::new()),
            employee_repo,
            schedule_repo: Arc::new(InMemoryScheduleRepository::new()),
            event_bus: create_event_bus(),
        }
    }

    pub fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(
            self.attendance_repo.clone(),
            self.employee_repo.clone(),
            self.schedule_repo.clone(),
            self.event_bus.clone(),
        )
    }

    pub fn check_out_handler(&self) -> CheckOutHandler {
        CheckOutHandler::new(self.attendance_repo.clone(), self.event_bus.clone())
    }

    pub fn approve_handler(&self) -> ApproveLateArrivalHandler {
        ApproveLateArrivalHandler::new(self.attendance_repo.clone(), self.event_bus.clone())
    }

    pub fn reject_handler(&self) -> RejectLateArrivalHandler {
        RejectLateArrivalHandler::new(self.attendance_repo.clone(), self.event_bus.clone())
    }

    pub fn remove_handler(&self) -> RemoveAttendanceHandler {
        RemoveAttendanceHandler::new(self.attendance_repo.clone())
    }

    pub fn today_attendance_handler(&self) -> GetTodayAttendanceHandler {
        GetTodayAttendanceHandler::new(self.attendance_repo.clone())
    }

    pub fn attendance_details_handler(&self) -> GetAttendanceDetailsHandler {
        GetAttendanceDetailsHandler::new(self.attendance_repo.clone())
    }

    pub fn outlet_attendances_handler(&self) -> GetOutletAttendancesHandler {
        GetOutletAttendancesHandler::new(self.attendance_repo.clone())
    }

    pub fn employee_attendances_handler(&self) -> GetEmployeeAttendancesHandler {
        GetEmployeeAttendancesHandler::new(self.attendance_repo.clone())
    }

    pub fn service(&self) -> AttendanceService {
        AttendanceService::new(
            self.attendance_repo.clone(),
            self.employee_repo.clone(),
            self.schedule_repo.clone(),
            self.event_bus.clone(),
        )
    }

    pub fn attendance_count(&self) -> usize {
        self.attendance_repo.len()
    }

    pub async fn find_attendance(&self, id: i64) -> Option<Attendance> {
        use crate::domain::{AttendanceId, AttendanceRepository};
        self.attendance_repo
            .find_by_id(AttendanceId::new(id).unwrap())
            .await
            .unwrap()
    }
}

/// Env with employee 7 already checked in at the given time on 2024-03-01.
pub async fn checked_in_env(hour: u32, minute: u32) -> TestEnv {
    let env = TestEnv::new();
    env.check_in_handler()
        .handle(CheckinCommand {
            employee_id: 7,
            outlet_id: 3,
            checkin_time: Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap(),
            image_proof_path: "uploads/in.jpg".into(),
            late_notes: None,
            late_present_proof_path: None,
        })
        .await
        .expect("seed check-in");
    env
}

/// Env where employee 7 checked in at outlet 3 every workday 2024-03-04
/// through 2024-03-08.
pub async fn env_with_week_of_attendances() -> TestEnv {
    let env = TestEnv::new();
    let handler = env.check_in_handler();
    for day in 4..=8 {
        handler
            .handle(CheckinCommand {
                employee_id: 7,
                outlet_id: 3,
                checkin_time: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
                image_proof_path: "uploads/in.jpg".into(),
                late_notes: None,
                late_present_proof_path: None,
            })
            .await
            .expect("seed week");
    }
    env
}
