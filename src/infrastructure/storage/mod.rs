//! Storage adapters

pub mod memory;

pub use memory::{
    InMemoryAttendanceRepository, InMemoryEmployeeRepository, InMemoryScheduleRepository,
};
