//! # placa-core — Pico y Placa Prediction Core
//!
//! Decides whether a vehicle may legally circulate at a given weekday and
//! time of day under a license-plate-based circulation restriction scheme
//! ("Pico y Placa"): the plate's final digit is checked against a fixed
//! weekday/digit table during two restricted time windows.
//!
//! The crate has no I/O. Callers hand it a raw plate string plus an
//! already-resolved `chrono::Weekday` and `chrono::NaiveTime`; date/time
//! string parsing and all console interaction live in `placa-cli`.
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction.** [`LicensePlate`] can only be built through
//!    [`LicensePlate::parse()`], which normalizes, grammar-checks, classifies,
//!    and extracts the decision digit. No bare strings for plates.
//!
//! 2. **Injectable ruleset.** The weekday→digit table and the restricted
//!    windows are a [`RestrictionSchedule`] value handed to the
//!    [`Predictor`], never global state. Swapping a ruleset is constructing
//!    a new value; nothing is mutated in place.
//!
//! 3. **Fixed check order.** The engine checks weekend, then time window,
//!    then digit — the first check that settles the outcome also supplies
//!    the reason, so the ordering is part of the contract.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The core never logs, retries, or swallows errors; every failure is
//!   returned to the caller at the point of detection.

pub mod error;
pub mod plate;
pub mod predict;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use error::{PlateError, PredictError};
pub use plate::{LicensePlate, VehicleClass};
pub use predict::{CirculationDecision, Predictor};
pub use schedule::{RestrictionSchedule, TimeWindow};
