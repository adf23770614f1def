//! # Circulation Prediction
//!
//! The decision engine. Checks run in a fixed order and the first one that
//! settles the outcome also supplies the reason:
//!
//! 1. Weekend — always exempt.
//! 2. Time window — outside both restricted windows is always allowed.
//! 3. Digit table — only a digit listed for the day is barred.
//!
//! The ordering is part of the contract: on a Saturday at 08:00 with a
//! restricted digit, the weekend reason wins.
//!
//! Pure and synchronous — no I/O, no shared mutable state. A `Predictor`
//! may be shared freely across threads; nothing mutates the schedule.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::schedule::RestrictionSchedule;

/// The outcome of a circulation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CirculationDecision {
    /// Whether the vehicle may circulate at the queried moment.
    pub can_circulate: bool,
    /// Human-readable explanation, suitable for display as-is.
    pub reason: String,
}

/// Decides circulation against an injected [`RestrictionSchedule`].
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    schedule: RestrictionSchedule,
}

impl Predictor {
    /// Create a predictor over an explicit schedule.
    pub fn new(schedule: RestrictionSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this predictor evaluates against.
    pub fn schedule(&self) -> &RestrictionSchedule {
        &self.schedule
    }

    /// Decide whether a vehicle whose plate ends in `last_digit` may
    /// circulate on `day` at `time`.
    ///
    /// # Errors
    ///
    /// [`PredictError::InvalidDigit`] when `last_digit` is not in `0..=9`.
    /// A digit coming from a parsed [`LicensePlate`](crate::LicensePlate)
    /// is always in range.
    pub fn predict(
        &self,
        last_digit: u8,
        day: Weekday,
        time: NaiveTime,
    ) -> Result<CirculationDecision, PredictError> {
        if last_digit > 9 {
            return Err(PredictError::InvalidDigit(last_digit));
        }

        if is_weekend(day) {
            return Ok(CirculationDecision {
                can_circulate: true,
                reason: "The vehicle CAN circulate today. No restrictions on weekends"
                    .to_owned(),
            });
        }

        if !self.is_restricted_time(time) {
            return Ok(CirculationDecision {
                can_circulate: true,
                reason: format!(
                    "The vehicle CAN circulate right now. Time {} is outside restricted hours",
                    time.format("%H:%M")
                ),
            });
        }

        if !self.schedule.restricted_digits(day).contains(&last_digit) {
            return Ok(CirculationDecision {
                can_circulate: true,
                reason: format!(
                    "The vehicle CAN circulate today. Last digit {last_digit} is not restricted on {}",
                    day_name(day)
                ),
            });
        }

        Ok(CirculationDecision {
            can_circulate: false,
            reason: format!(
                "The vehicle CANNOT circulate today. Pico y Placa restriction applies. \
                 Digit {last_digit} is restricted on {} during {} and {}",
                day_name(day),
                self.schedule.morning_window(),
                self.schedule.evening_window(),
            ),
        })
    }

    fn is_restricted_time(&self, time: NaiveTime) -> bool {
        self.schedule.morning_window().contains(time)
            || self.schedule.evening_window().contains(time)
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Full English day name; `chrono`'s `Display` for `Weekday` is the
/// three-letter abbreviation.
fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
