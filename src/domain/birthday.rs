//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the `DD.MM.YYYY` layout used everywhere
/// dates are read or printed.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's `%d`/`%m` also accept single digits, so the layout is checked first.
static DATE_LAYOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date layout regex")
});

/// How a February 29 birthday is observed in a year without that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on March 1
    #[default]
    March1,
    /// Celebrate on February 28
    February28,
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mar1" | "march1" => Ok(LeapDayPolicy::March1),
            "feb28" | "february28" => Ok(LeapDayPolicy::February28),
            other => Err(format!("expected `mar1` or `feb28`, got: {}", other)),
        }
    }
}

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` under strict calendar rules and printed back in
/// the same layout, so a valid input string round-trips exactly.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(Birthday::new("30.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on wrong separators,
    /// non-numeric fields, out-of-range day or month, or a date that does
    /// not exist (such as `30.02.2023`).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !DATE_LAYOUT.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// The full date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// A February 29 birthday in a non-leap year resolves according to
    /// `policy`. Returns `None` only when `year` is outside chrono's range.
    pub fn occurrence_in(&self, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| match policy {
            LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
