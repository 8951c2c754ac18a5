//! Upcoming-birthday computation.
//!
//! Dates are chosen around Monday 2024-06-10 unless noted.

use chrono::NaiveDate;
use contact_assistant::domain::{ContactName, LeapDayPolicy};
use contact_assistant::models::{AddressBook, BirthdayWindow, Record, UpcomingBirthday};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut record = Record::new(ContactName::new(*name).unwrap());
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

fn upcoming(book: &AddressBook, today: NaiveDate) -> Vec<(String, String)> {
    book.get_upcoming_birthdays(today)
        .iter()
        .map(|u: &UpcomingBirthday| (u.name.clone(), u.formatted_date()))
        .collect()
}

#[test]
fn test_saturday_moves_to_monday() {
    let book = book(&[("Sat", "15.06.1990")]);
    assert_eq!(
        upcoming(&book, ymd(2024, 6, 10)),
        vec![("Sat".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_sunday_moves_to_monday() {
    let book = book(&[("Sun", "16.06.1990")]);
    assert_eq!(
        upcoming(&book, ymd(2024, 6, 10)),
        vec![("Sun".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_outside_window_is_excluded() {
    let book = book(&[("Later", "20.06.1990"), ("Past", "01.06.1990")]);
    assert!(upcoming(&book, ymd(2024, 6, 10)).is_empty());
}

#[test]
fn test_last_day_of_window_is_included() {
    let book = book(&[("Edge", "17.06.1990"), ("Beyond", "18.06.1990")]);
    assert_eq!(
        upcoming(&book, ymd(2024, 6, 10)),
        vec![("Edge".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_weekend_on_last_day_shifts_past_window() {
    // Day 7 of the window is a Saturday; its Monday is outside the window
    let today = ymd(2024, 6, 8); // Saturday
    let book = book(&[("Late", "15.06.1990")]); // Saturday, day 7
    assert_eq!(
        upcoming(&book, today),
        vec![("Late".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_weekday_birthdays_keep_their_date() {
    let book = book(&[("Tue", "11.06.1990"), ("Fri", "14.06.1990")]);
    assert_eq!(
        upcoming(&book, ymd(2024, 6, 10)),
        vec![
            ("Tue".to_string(), "11.06.2024".to_string()),
            ("Fri".to_string(), "14.06.2024".to_string()),
        ]
    );
}

#[test]
fn test_no_wraparound_into_next_year() {
    let book = book(&[("NewYear", "02.01.1990")]);
    assert!(upcoming(&book, ymd(2024, 12, 28)).is_empty());
}

#[test]
fn test_year_end_saturday_shifts_into_next_year() {
    // 2022-12-31 is a Saturday
    let book = book(&[("Eve", "31.12.1990")]);
    assert_eq!(
        upcoming(&book, ymd(2022, 12, 27)),
        vec![("Eve".to_string(), "02.01.2023".to_string())]
    );
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let book = book(&[("Leap", "29.02.1996")]);
    // 2025-03-01 is a Saturday, so the default policy lands on Monday 03-03
    assert_eq!(
        upcoming(&book, ymd(2025, 2, 25)),
        vec![("Leap".to_string(), "03.03.2025".to_string())]
    );

    let window = BirthdayWindow {
        leap_day_policy: LeapDayPolicy::February28,
        ..Default::default()
    };
    // 2025-02-28 is a Friday
    let result = book.upcoming_birthdays_within(ymd(2025, 2, 25), &window);
    assert_eq!(result[0].date, ymd(2025, 2, 28));
}

#[test]
fn test_leap_day_birthday_in_leap_year() {
    let book = book(&[("Leap", "29.02.1996")]);
    // 2024-02-29 is a Thursday
    assert_eq!(
        upcoming(&book, ymd(2024, 2, 26)),
        vec![("Leap".to_string(), "29.02.2024".to_string())]
    );
}

#[test]
fn test_result_is_deterministic() {
    let book = book(&[("A", "11.06.1990"), ("B", "12.06.1990"), ("C", "13.06.1990")]);
    let first = upcoming(&book, ymd(2024, 6, 10));
    let second = upcoming(&book, ymd(2024, 6, 10));
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
}
