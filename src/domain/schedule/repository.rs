//! Schedule repository interface

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};

use super::model::WorkSchedule;
use crate::domain::values::OutletId;
use crate::domain::DomainResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn find_by_outlet_and_day(
        &self,
        outlet_id: OutletId,
        day: Weekday,
    ) -> DomainResult<Option<WorkSchedule>>;

    /// The active schedule covering the weekday of `date`, if any.
    async fn find_active_schedule_for_outlet(
        &self,
        outlet_id: OutletId,
        date: NaiveDate,
    ) -> DomainResult<Option<WorkSchedule>>;
}
