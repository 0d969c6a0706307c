//! Work schedule read model

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::values::OutletId;

/// An outlet's expected check-in/check-out time for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub outlet_id: OutletId,
    pub day: Weekday,
    /// Expected check-in time of day
    pub checkin_time: NaiveTime,
    /// Expected check-out time of day
    pub checkout_time: NaiveTime,
    pub is_active: bool,
}

impl WorkSchedule {
    pub fn new(
        outlet_id: OutletId,
        day: Weekday,
        checkin_time: NaiveTime,
        checkout_time: NaiveTime,
    ) -> Self {
        Self {
            outlet_id,
            day,
            checkin_time,
            checkout_time,
            is_active: true,
        }
    }

    /// The scheduled check-in instant on a concrete work date.
    ///
    /// Combines the schedule's time-of-day with the date so lateness can be
    /// computed as a true elapsed difference between instants.
    pub fn scheduled_checkin_at(&self, date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(self.checkin_time))
    }

    /// The scheduled check-out instant on a concrete work date.
    pub fn scheduled_checkout_at(&self, date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(self.checkout_time))
    }
}
