//! Next match date and the countdown shown alongside every view.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Start and end of the upcoming match, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSchedule {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

/// Serialized next match block included in views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMatch {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    /// Whole days until the match date; negative once it has passed.
    pub days_left: i64,
}

impl MatchSchedule {
    pub fn new(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self { starts_at, ends_at }
    }

    /// Calendar days between `today` and the match date. Time of day is ignored.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.starts_at.date() - today).num_days()
    }

    pub fn next_match(&self, today: NaiveDate) -> NextMatch {
        NextMatch {
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            days_left: self.days_left(today),
        }
    }

    /// Next match block relative to the server's local date.
    pub fn next_match_today(&self) -> NextMatch {
        self.next_match(Local::now().date_naive())
    }
}
