//! # License Plate Parsing & Classification
//!
//! Ecuadorian-style plates: a 2–3 letter prefix, a single dash, 3–4 digits,
//! and for motorcycles one trailing letter. The decision digit is the final
//! digit of the tail — the last character for cars, the character before
//! the trailing letter for motorcycles.
//!
//! ## Invariant
//!
//! A [`LicensePlate`] can only be obtained through [`LicensePlate::parse()`],
//! so every value of the type holds the normalized (uppercase, trimmed) form
//! and matches the plate grammar. Deserialization goes through the same
//! constructor and re-validates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PlateError;

static PLATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2,3}-[0-9]{3,4}[A-Z]?$")
        .expect("hard-coded regular expression to be valid")
});

/// Vehicle classification derived from the plate shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// The tail is all digits.
    Car,
    /// The tail carries one trailing letter.
    Motorcycle,
}

/// A validated, normalized license plate.
///
/// Carries the normalized plate text, the vehicle classification, and the
/// single decision digit used by the restriction scheme.
///
/// Serializes as the normalized plate string (e.g. `"PBA-1234"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicensePlate {
    plate: String,
    class: VehicleClass,
    last_digit: u8,
}

impl LicensePlate {
    /// Parse and validate a raw plate string.
    ///
    /// The input is uppercased and trimmed; that normalized form is what
    /// the returned value stores. Whitespace inside the plate body is not
    /// tolerated — only surrounding whitespace is stripped.
    ///
    /// # Errors
    ///
    /// - [`PlateError::MissingInput`] when the input is empty or
    ///   whitespace-only.
    /// - [`PlateError::InvalidFormat`] when the normalized input does not
    ///   match `^[A-Z]{2,3}-[0-9]{3,4}[A-Z]?$`.
    /// - [`PlateError::DigitExtraction`] when the digit position does not
    ///   hold a decimal digit (unreachable for grammar-valid input).
    pub fn parse(raw: &str) -> Result<Self, PlateError> {
        if raw.trim().is_empty() {
            return Err(PlateError::MissingInput);
        }

        let upper = raw.to_uppercase();
        let plate = upper.trim().to_owned();

        if !PLATE_PATTERN.is_match(&plate) {
            return Err(PlateError::InvalidFormat(plate));
        }

        // The grammar admits exactly one dash, so the split cannot fail;
        // treat a miss as a format error all the same.
        let tail = match plate.split_once('-') {
            Some((_, tail)) => tail,
            None => return Err(PlateError::InvalidFormat(plate)),
        };

        let class = if tail.ends_with(|c: char| c.is_ascii_alphabetic()) {
            VehicleClass::Motorcycle
        } else {
            VehicleClass::Car
        };

        // Car: final character of the tail. Motorcycle: the character
        // before the trailing letter.
        let mut from_end = tail.chars().rev();
        let digit_char = match class {
            VehicleClass::Car => from_end.next(),
            VehicleClass::Motorcycle => from_end.nth(1),
        };
        let last_digit = match digit_char.and_then(|c| c.to_digit(10)) {
            Some(d) => d as u8,
            None => return Err(PlateError::DigitExtraction(plate)),
        };

        Ok(Self {
            plate,
            class,
            last_digit,
        })
    }

    /// The normalized plate text.
    pub fn as_str(&self) -> &str {
        &self.plate
    }

    /// The vehicle classification derived from the plate shape.
    pub fn vehicle_class(&self) -> VehicleClass {
        self.class
    }

    /// Whether this is a motorcycle plate (tail ends in a letter).
    pub fn is_motorcycle(&self) -> bool {
        self.class == VehicleClass::Motorcycle
    }

    /// The decision digit, always in `0..=9`.
    pub fn last_digit(&self) -> u8 {
        self.last_digit
    }
}

impl FromStr for LicensePlate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LicensePlate {
    type Error = PlateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LicensePlate> for String {
    fn from(plate: LicensePlate) -> Self {
        plate.plate
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- valid cars ----

    #[test]
    fn test_car_plates_extract_final_digit() {
        for (raw, digit) in [("PBA-1234", 4), ("ABC-0001", 1), ("paB-9999", 9)] {
            let plate = LicensePlate::parse(raw).unwrap();
            assert_eq!(plate.vehicle_class(), VehicleClass::Car);
            assert!(!plate.is_motorcycle());
            assert_eq!(plate.last_digit(), digit, "plate {raw}");
        }
    }

    #[test]
    fn test_car_plate_with_three_digits() {
        let plate = LicensePlate::parse("PBX-123").unwrap();
        assert!(!plate.is_motorcycle());
        assert_eq!(plate.last_digit(), 3);
    }

    // ---- valid motorcycles ----

    #[test]
    fn test_motorcycle_plates_extract_second_to_last() {
        for (raw, digit) in [("PA-123J", 3), ("AB-456Z", 6), ("ab-789x", 9)] {
            let plate = LicensePlate::parse(raw).unwrap();
            assert_eq!(plate.vehicle_class(), VehicleClass::Motorcycle);
            assert!(plate.is_motorcycle());
            assert_eq!(plate.last_digit(), digit, "plate {raw}");
        }
    }

    #[test]
    fn test_car_plate_not_detected_as_motorcycle() {
        let plate = LicensePlate::parse("PBA-5678").unwrap();
        assert!(!plate.is_motorcycle());
        assert_eq!(plate.last_digit(), 8);
    }

    // ---- normalization ----

    #[test]
    fn test_plate_is_trimmed_and_uppercased() {
        let plate = LicensePlate::parse("  pba-1234 ").unwrap();
        assert_eq!(plate.as_str(), "PBA-1234");
    }

    #[test]
    fn test_parse_is_idempotent_on_normalized_output() {
        let first = LicensePlate::parse(" pa-123j ").unwrap();
        let second = LicensePlate::parse(first.as_str()).unwrap();
        assert_eq!(first, second);
    }

    // ---- missing input ----

    #[test]
    fn test_empty_and_whitespace_input_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = LicensePlate::parse(raw).unwrap_err();
            assert!(matches!(err, PlateError::MissingInput), "input {raw:?}");
        }
    }

    // ---- invalid formats ----

    #[test]
    fn test_invalid_formats_rejected() {
        for raw in [
            "123-ABC",
            "PB-12",
            "PBA1234",
            "PBA-12A4",
            "PB--1234",
            "ABCD-1234",
            "PBA-12345",
            "PA-123JX",
            "PB A-1234",
        ] {
            let err = LicensePlate::parse(raw).unwrap_err();
            assert!(
                matches!(err, PlateError::InvalidFormat(_)),
                "input {raw:?} gave {err:?}"
            );
        }
    }

    // ---- display / fromstr ----

    #[test]
    fn test_display_is_normalized_form() {
        let plate: LicensePlate = "ab-456z".parse().unwrap();
        assert_eq!(plate.to_string(), "AB-456Z");
    }

    // ---- serde ----

    #[test]
    fn test_serializes_as_plain_string() {
        let plate = LicensePlate::parse("PBA-1234").unwrap();
        assert_eq!(serde_json::to_string(&plate).unwrap(), r#""PBA-1234""#);
    }

    #[test]
    fn test_deserialization_revalidates() {
        let plate: LicensePlate = serde_json::from_str(r#""pa-123j""#).unwrap();
        assert_eq!(plate.as_str(), "PA-123J");
        assert!(plate.is_motorcycle());
        assert!(serde_json::from_str::<LicensePlate>(r#""PB--1234""#).is_err());
    }
}
