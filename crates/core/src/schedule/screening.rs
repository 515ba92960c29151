use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How long a maintenance visit keeps a theater out of service.
pub const MAINTENANCE_WINDOW_MINUTES: i64 = 60;

/// A scheduled showing of one movie in one theater.
/// Invariant: `start_time < end_time`, enforced at creation by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    pub id: u64,
    pub movie_id: u64,
    pub theater_id: u64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub tickets_sold: u32,
}

impl Screening {
    /// Half-open containment: a screening is running from its start up to,
    /// but not including, its end.
    pub fn is_running_at(&self, now: NaiveDateTime) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

/// A scheduled out-of-service window for a theater, starting at
/// `scheduled_date` and running for a fixed length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: u64,
    pub theater_id: u64,
    pub scheduled_date: NaiveDateTime,
    pub description: String,
}

impl Maintenance {
    pub fn window_end(&self, window: Duration) -> NaiveDateTime {
        self.scheduled_date + window
    }

    pub fn is_active_at(&self, now: NaiveDateTime, window: Duration) -> bool {
        self.scheduled_date <= now && now < self.window_end(window)
    }
}
