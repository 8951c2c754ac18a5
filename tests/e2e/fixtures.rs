//! Scripts and dates shared by the session tests.

use chrono::NaiveDate;

/// Monday 2024-06-10.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// A script that adds three contacts with birthdays around `monday()`.
pub fn birthday_script() -> String {
    [
        "add John 1234567890",
        "add-birthday John 15.06.1990",
        "add Jane 0987654321",
        "add-birthday Jane 12.06.1985",
        "add Bob 5555555555",
        "add-birthday Bob 25.06.1970",
        "birthdays",
        "exit",
    ]
    .join("\n")
}
