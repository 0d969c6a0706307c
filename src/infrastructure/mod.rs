//! Infrastructure adapters
//!
//! Only the in-memory storage adapters live in this crate; database-backed
//! implementations of the same ports belong to the persistence collaborator.

pub mod storage;

pub use storage::{
    InMemoryAttendanceRepository, InMemoryEmployeeRepository, InMemoryScheduleRepository,
};
