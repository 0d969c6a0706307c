//! Outlet attendances range query handler

use std::sync::Arc;

use crate::application::dto::{AttendanceResult, GetOutletAttendancesQuery};
use crate::domain::{AttendanceRepository, DomainResult, OutletId};
use crate::shared::{PaginatedResult, PaginationParams};

/// Pages through an outlet's attendance records for a date range.
///
/// Pagination happens in the repository, not here; this handler only maps
/// the page to result DTOs and preserves the page/limit/total contract.
pub struct GetOutletAttendancesHandler {
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl GetOutletAttendancesHandler {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    pub async fn handle(
        &self,
        query: GetOutletAttendancesQuery,
    ) -> DomainResult<PaginatedResult<AttendanceResult>> {
        let outlet_id = OutletId::new(query.outlet_id)?;
        let pagination = PaginationParams::new(query.page, query.limit);

        let page = self
            .attendance_repo
            .find_by_outlet_and_date_range(outlet_id, query.start_date, query.end_date, pagination)
            .await?;

        Ok(page.map(|attendance| AttendanceResult::from_attendance(&attendance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::env_with_week_of_attendances;
    use chrono::NaiveDate;

    fn range_query(page: u32, limit: u32) -> GetOutletAttendancesQuery {
        GetOutletAttendancesQuery {
            outlet_id: 3,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            page,
            limit,
        }
    }

    #[tokio::test]
    async fn pages_through_the_range() {
        let env = env_with_week_of_attendances().await;
        let handler = env.outlet_attendances_handler();

        let first = handler.handle(range_query(1, 2)).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);

        let last = handler.handle(range_query(3, 2)).await.unwrap();
        assert_eq!(last.items.len(), 1);
    }

    #[tokio::test]
    async fn items_are_ordered_by_checkin_time() {
        let env = env_with_week_of_attendances().await;
        let handler = env.outlet_attendances_handler();

        let page = handler.handle(range_query(1, 10)).await.unwrap();
        let times: Vec<_> = page.items.iter().map(|r| r.checkin_time).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[tokio::test]
    async fn range_excludes_outside_days() {
        let env = env_with_week_of_attendances().await;
        let handler = env.outlet_attendances_handler();

        let narrow = handler
            .handle(GetOutletAttendancesQuery {
                outlet_id: 3,
                start_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                page: 1,
                limit: 10,
            })
            .await
            .unwrap();
        assert_eq!(narrow.total, 2);
    }
}
