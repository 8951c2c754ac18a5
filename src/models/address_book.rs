//! The in-memory address book and its upcoming-birthday query.

use super::record::Record;
use super::upcoming::{shift_weekend_to_monday, BirthdayWindow, UpcomingBirthday};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// A mapping from contact name to [`Record`].
///
/// Records are kept in insertion order so listing and birthday queries are
/// deterministic. Replacing a record under an existing name keeps the
/// original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored
    /// under that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        match self.index.get(&key).copied() {
            Some(position) => self.records[position] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next seven days of `today`.
    ///
    /// See [`AddressBook::upcoming_birthdays_within`].
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, &BirthdayWindow::default())
    }

    /// Contacts whose birthday, placed in `today`'s year, falls between
    /// `today` and `today + window.days` inclusive.
    ///
    /// Weekend dates are moved to the following Monday after the window
    /// check, so a birthday on the last day of the window can be reported
    /// with a date past it. The year is always `today`'s year: a January
    /// birthday is not found from late December.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let candidate = birthday.occurrence_in(today.year(), window.leap_day_policy)?;
                if !window.contains(today, candidate) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: shift_weekend_to_monday(candidate),
                })
            })
            .collect()
    }
}
