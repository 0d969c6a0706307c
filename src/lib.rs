//! # RetailOps Attendance Service
//!
//! Attendance lifecycle engine for the retail/workforce back-office.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, value types, events and ports
//! - **application**: Command/query handlers and the service facade
//! - **infrastructure**: In-memory port adapters for development and tests
//! - **notifications**: Real-time domain event broadcasting
//!
//! Persistence, HTTP transport, authentication and the inventory/finance
//! domains are external collaborators reached only through the repository
//! ports in `domain`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod notifications;
pub mod shared;

pub use application::AttendanceService;
pub use domain::{Attendance, AttendanceEvent, DomainError, DomainResult};

// Re-export notifications
pub use notifications::{create_event_bus, EventBus, SharedEventBus};
