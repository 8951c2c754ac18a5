//! Command handlers.
//!
//! Each handler takes the command's arguments and the address book, and
//! returns the reply text or a [`CommandError`]. Extra arguments are ignored.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult, NotFound};
use crate::models::{AddressBook, BirthdayWindow, Record};
use chrono::NaiveDate;

/// Whether `add` created a new record or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

/// The argument at `index`, or `InsufficientArguments`.
fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::InsufficientArguments)
}

/// `add <name> <phone>`: add a phone to a contact, creating the contact first
/// if it does not exist.
///
/// A new contact is stored before the phone is validated, so an invalid
/// phone still leaves the (phoneless) contact in the book.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<AddOutcome> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let outcome = if book.find(name).is_some() {
        AddOutcome::Updated
    } else {
        book.add_record(Record::new(ContactName::new(name)?));
        AddOutcome::Created
    };

    let record = book.find_mut(name).ok_or(NotFound::Contact)?;
    record.add_phone(phone)?;
    Ok(outcome)
}

/// `change <name> <old> <new>`: replace one of a contact's phones.
///
/// The new value is not validated.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = book.find_mut(name).ok_or(NotFound::Contact)?;
    if record.update_phone(old_phone, new_phone) {
        Ok("Phone number updated.".to_string())
    } else {
        Err(NotFound::Phone.into())
    }
}

/// `phone <name>`: a contact's phones, comma separated.
pub fn phone_contact(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let record = book.find(name).ok_or(NotFound::Contact)?;
    Ok(record.phones().collect::<Vec<_>>().join(", "))
}

/// `all`: one `name: phones` line per contact, in insertion order.
pub fn show_all_contacts(book: &AddressBook) -> String {
    book.records()
        .map(|record| {
            format!(
                "{}: {}",
                record.name(),
                record.phones().collect::<Vec<_>>().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    let record = book.find_mut(name).ok_or(NotFound::Contact)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: a contact's birthday as `DD.MM.YYYY`.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    book.find(name)
        .and_then(Record::birthday)
        .map(ToString::to_string)
        .ok_or_else(|| NotFound::Birthday.into())
}

/// `birthdays`: one `name: DD.MM.YYYY` line per upcoming birthday.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window: &BirthdayWindow) -> String {
    book.upcoming_birthdays_within(today, window)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
