//! Match history: filtering, newest-first ordering, pagination and day grouping.

use crate::models::MatchRecord;
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

/// Default page size for history listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination request. Values below 1 are clamped to 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of records plus the filtered total.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordPage {
    pub records: Vec<MatchRecord>,
    pub total: usize,
    pub request: PageRequest,
}

/// Keep records involving `friend_id` (all when `None`), sort newest first, then page.
///
/// The sort is stable, so records sharing a timestamp keep their stored order.
pub fn paginate(
    mut records: Vec<MatchRecord>,
    request: PageRequest,
    friend_id: Option<&str>,
) -> RecordPage {
    if let Some(fid) = friend_id {
        records.retain(|r| r.involves(fid));
    }
    records.sort_by(|a, b| b.create_time.cmp(&a.create_time));
    let total = records.len();
    let records = records
        .into_iter()
        .skip(request.offset())
        .take(request.limit as usize)
        .collect();
    RecordPage {
        records,
        total,
        request,
    }
}

/// Records sharing a calendar date.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub count: usize,
    pub records: Vec<MatchRecord>,
}

/// Group records by the calendar date of `create_time` in `tz`.
///
/// Groups come out newest date first; records keep their input order within a group.
pub fn group_by_day<Tz: TimeZone>(records: &[MatchRecord], tz: &Tz) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for record in records {
        let date = record.create_time.with_timezone(tz).date_naive();
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => {
                group.records.push(record.clone());
                group.count += 1;
            }
            None => groups.push(DayGroup {
                date,
                count: 1,
                records: vec![record.clone()],
            }),
        }
    }
    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
