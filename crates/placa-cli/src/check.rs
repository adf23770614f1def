//! # `check` Handler
//!
//! Resolves the collaborator-facing inputs — plate text, `yyyy-MM-dd` date,
//! `HH:mm` time — and runs one parse + predict pair. Date and time default
//! to the current local moment, so a bare `placa check PBA-1234` answers
//! "can this plate circulate right now?".

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use clap::Args;
use placa_core::{LicensePlate, Predictor};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// License plate to check, e.g. PBA-1234 (car) or PA-123J (motorcycle).
    pub plate: String,

    /// Date to check, formatted yyyy-MM-dd. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Time of day to check, 24-hour HH:mm. Defaults to the current time.
    #[arg(long)]
    pub time: Option<String>,

    /// Print the decision as JSON instead of the plain reason line.
    #[arg(long)]
    pub json: bool,
}

/// Run one circulation check and print the decision.
pub fn run(args: &CheckArgs) -> anyhow::Result<()> {
    let plate = LicensePlate::parse(&args.plate)?;

    let now = Local::now();
    let day = match &args.date {
        Some(s) => parse_date(s)?.weekday(),
        None => now.date_naive().weekday(),
    };
    let time = match &args.time {
        Some(s) => parse_time(s)?,
        None => truncate_to_minutes(now.time()),
    };

    tracing::debug!(plate = %plate, ?day, %time, "resolved check inputs");

    let decision = Predictor::default().predict(plate.last_digit(), day, time)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", decision.reason);
    }

    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}; expected yyyy-MM-dd"))
}

fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("invalid time {s:?}; expected 24-hour HH:mm"))
}

/// Drop seconds and sub-seconds so "now" behaves like an `HH:mm` input.
fn truncate_to_minutes(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
