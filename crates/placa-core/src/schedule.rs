//! # Restriction Schedule
//!
//! The ruleset the decision engine runs against: which plate digits are
//! barred on which weekday, and the two daily time windows during which
//! the bar is enforced. Constructed once and treated as read-only; a
//! different ruleset is a new value, never an in-place edit.
//!
//! The default schedule is the municipal two-digits-per-weekday partition
//! (Monday {1,2} through Friday {9,0}) with restricted windows 07:00–09:30
//! and 16:00–19:30, both ends inclusive.

use chrono::{NaiveTime, Weekday};
use std::collections::HashMap;
use std::fmt;

/// An inclusive time-of-day interval.
///
/// Both boundaries belong to the window: a time exactly on an edge counts
/// as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    /// Create a window spanning `start..=end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether `time` falls within the window, boundaries included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// The inclusive lower bound.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The inclusive upper bound.
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl fmt::Display for TimeWindow {
    /// Renders as `HH:mm-HH:mm`, e.g. `07:00-09:30`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// The weekday→digit table plus the two restricted windows.
///
/// Saturday and Sunday carry no entry; [`RestrictionSchedule::restricted_digits`]
/// returns an empty slice for any day without one. Callers supplying custom
/// rulesets are trusted — no shape validation beyond the types.
#[derive(Debug, Clone)]
pub struct RestrictionSchedule {
    restricted_digits_by_day: HashMap<Weekday, Vec<u8>>,
    morning: TimeWindow,
    evening: TimeWindow,
}

impl RestrictionSchedule {
    /// Create a schedule from an explicit ruleset.
    pub fn new(
        restricted_digits_by_day: HashMap<Weekday, Vec<u8>>,
        morning: TimeWindow,
        evening: TimeWindow,
    ) -> Self {
        Self {
            restricted_digits_by_day,
            morning,
            evening,
        }
    }

    /// The digits barred on `day`; empty when the day has no entry
    /// (weekends under the default ruleset).
    pub fn restricted_digits(&self, day: Weekday) -> &[u8] {
        self.restricted_digits_by_day
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The morning restricted window.
    pub fn morning_window(&self) -> &TimeWindow {
        &self.morning
    }

    /// The evening restricted window.
    pub fn evening_window(&self) -> &TimeWindow {
        &self.evening
    }
}

impl Default for RestrictionSchedule {
    /// The municipal ruleset: Monday {1,2}, Tuesday {3,4}, Wednesday {5,6},
    /// Thursday {7,8}, Friday {9,0}; windows 07:00–09:30 and 16:00–19:30.
    fn default() -> Self {
        let restricted_digits_by_day = HashMap::from([
            (Weekday::Mon, vec![1, 2]),
            (Weekday::Tue, vec![3, 4]),
            (Weekday::Wed, vec![5, 6]),
            (Weekday::Thu, vec![7, 8]),
            (Weekday::Fri, vec![9, 0]),
        ]);
        Self {
            restricted_digits_by_day,
            morning: TimeWindow::new(hm(7, 0), hm(9, 30)),
            evening: TimeWindow::new(hm(16, 0), hm(19, 30)),
        }
    }
}

/// Build a `NaiveTime` from hard-coded hour/minute constants.
fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("hard-coded time to be valid")
}
