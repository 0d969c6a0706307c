//! Employee collaborator
//!
//! Read-only here: employees and their outlet assignments are owned by the
//! workforce domain and consulted during check-in validation.

pub mod model;
pub mod repository;

pub use model::Employee;
pub use repository::EmployeeRepository;
