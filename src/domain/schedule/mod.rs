//! Work schedule collaborator
//!
//! Read-only here: schedules are owned by the outlet-management domain and
//! consumed as the lateness baseline for check-ins.

pub mod model;
pub mod repository;

pub use model::WorkSchedule;
pub use repository::ScheduleRepository;
