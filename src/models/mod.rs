//! Data models for the contact assistant.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the results of the upcoming-birthday query.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::{PhoneEntry, Record};
pub use upcoming::{shift_weekend_to_monday, BirthdayWindow, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
