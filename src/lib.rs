//! Contact assistant - a command-line bot for keeping contacts in memory.
//!
//! The assistant stores names, phone numbers and birthdays, answers line
//! commands, and lists the contacts to congratulate over the coming week
//! (weekend birthdays are moved to the following Monday).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records, the address book, upcoming birthdays
//! - **commands**: Input parsing, command handlers, reply formatting
//! - **session**: The interactive read loop
//! - **clock**: Where "today" comes from
//! - **config**: Configuration from environment variables
//! - **error**: Error types for commands and configuration
//! - **metrics**: Per-session command counters

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, LeapDayPolicy, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, NotFound};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{AddressBook, BirthdayWindow, PhoneEntry, Record, UpcomingBirthday};
pub use session::run_session;
