//! # crontab-lite
//!
//! A Rust library for parsing a simplified crontab format.
//! Built for tools that need a validated, structured view of
//! `<minute> <hour> <command>` schedule lines without pulling in a full
//! cron expression engine.
//!
//! ## Line format
//!
//! Each line carries three or more whitespace-separated tokens:
//!
//! ```text
//! 30 5  backup.sh --full
//! *  *  poll-queue
//! ```
//!
//! - The first token is the minute: `*` or an integer in `0..60`.
//! - The second token is the hour: `*` or an integer in `0..24`.
//! - Everything after the second token is the command. Runs of
//!   whitespace between command tokens collapse to single spaces.
//!
//! Ranges, steps, lists, day fields and named aliases are not part of
//! the format.
//!
//! ## Quick Start
//!
//! ```rust
//! use crontab_lite::schedule::{field::TimeField, reader::read_schedule};
//!
//! let input = "0 5 backup.sh\n* * poll-queue\n";
//! let schedule = read_schedule(input.as_bytes())?;
//!
//! assert_eq!(schedule[0].command, "backup.sh");
//! assert_eq!(schedule[1].minute, TimeField::Wildcard);
//! # Ok::<(), crontab_lite::schedule::error::ScheduleError>(())
//! ```
//!
//! Reading stops at the first bad line: the error is returned
//! immediately and no partial schedule is produced.
//!
//! ## Single lines
//!
//! ```rust
//! use crontab_lite::schedule::{entry::ScheduleEntry, field::TimeField};
//!
//! let entry = ScheduleEntry::parse("30 12   echo   hi")?;
//! assert_eq!(entry.minute, TimeField::Specific(30));
//! assert_eq!(entry.hour, TimeField::Specific(12));
//! assert_eq!(entry.command, "echo hi");
//! # Ok::<(), crontab_lite::schedule::error::ScheduleError>(())
//! ```
//!
//! ## Optional Features
//!
//! - `tokio` (default): async reader over `tokio::io::AsyncBufRead`
//! - `serde`: enable serialization support for all schedule types
//! - `tracing`: structured logging integration; rejected lines and the
//!   swallowed per-field causes are logged before the generic error is
//!   returned

pub mod schedule;
