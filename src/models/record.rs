//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use std::fmt;

/// One stored phone number.
///
/// Numbers added through [`Record::add_phone`] are validated. Numbers written
/// by [`Record::update_phone`] are stored exactly as given, so an entry may
/// hold a value that would not pass `PhoneNumber` validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEntry {
    /// A phone number that passed validation
    Validated(PhoneNumber),
    /// A replacement value stored without validation
    Unvalidated(String),
}

impl PhoneEntry {
    /// The stored value as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Validated(phone) => phone.as_str(),
            Self::Unvalidated(raw) => raw,
        }
    }
}

impl fmt::Display for PhoneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneEntry>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> impl Iterator<Item = &str> + '_ {
        self.phones.iter().map(PhoneEntry::as_str)
    }

    /// Stored phone entries, including whether each was validated.
    pub fn phone_entries(&self) -> &[PhoneEntry] {
        &self.phones
    }

    /// The contact's birthday, if one was added.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(PhoneEntry::Validated(phone));
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// `new_raw` is stored verbatim and is NOT validated. Returns `false`
    /// when no phone matches `old_raw`.
    pub fn update_phone(&mut self, old_raw: &str, new_raw: &str) -> bool {
        match self.phones.iter_mut().find(|entry| entry.as_str() == old_raw) {
            Some(entry) => {
                *entry = PhoneEntry::Unvalidated(new_raw.to_string());
                true
            }
            None => false,
        }
    }
}
