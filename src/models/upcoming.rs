//! Upcoming birthday results and the window they are computed over.

use crate::domain::{LeapDayPolicy, DATE_FORMAT};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Default number of days ahead of today that count as "upcoming".
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Parameters for the upcoming-birthday computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Days after today included in the window (both ends inclusive)
    pub days: u32,

    /// How Feb 29 birthdays are placed in non-leap years
    pub leap_day_policy: LeapDayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            leap_day_policy: LeapDayPolicy::default(),
        }
    }
}

impl BirthdayWindow {
    /// Whether `date` lies between `today` and `today + days`, inclusive.
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        match today.checked_add_days(Days::new(u64::from(self.days))) {
            Some(end) => today <= date && date <= end,
            None => today <= date,
        }
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
///
/// Weekdays are returned unchanged.
pub fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date.checked_add_days(Days::new(u64::from(7 - weekday)))
            .unwrap_or(date)
    } else {
        date
    }
}

/// A contact whose birthday is coming up, with the date to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date (already moved off the weekend)
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(DATE_FORMAT))
    }
}
