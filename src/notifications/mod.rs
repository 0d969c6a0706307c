//! Notifications module
//!
//! Broadcasts attendance domain events to downstream subscribers
//! (dashboards, payroll sync, alerting). Delivery is at-most-once and
//! best-effort: handlers publish after the repository write returns, and a
//! failed or lagging subscriber never rolls back committed state.

pub mod event_bus;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
