use std::fmt;
use std::str::FromStr;

use crate::schedule::error::ScheduleError;
use crate::schedule::field::{FieldKind, TimeField};

/// One validated line of a simplified crontab.
///
/// An entry always holds fully validated time fields; there is no
/// partially-valid state. The command is the remainder of the line with
/// inter-token whitespace collapsed to single spaces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Minute field, `0..60` or wildcard
    pub minute: TimeField,

    /// Hour field, `0..24` or wildcard
    pub hour: TimeField,

    /// The command to run, never empty
    pub command: String,
}

impl ScheduleEntry {
    /// Parses one crontab line into an entry.
    ///
    /// The line is split on runs of whitespace (empty tokens dropped).
    /// The first token is validated as the minute and the second as the
    /// hour via [`TimeField::parse`]; every further token belongs to the
    /// command and is rejoined with single spaces.
    ///
    /// Parsing is a pure function of the line: the same input always
    /// yields the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidEntry`] if the line has fewer
    /// than three tokens or either time field fails validation. The
    /// per-field cause is collapsed into the line-level error; with the
    /// `tracing` feature it is logged at debug level before being
    /// discarded.
    ///
    /// # Examples
    /// ```rust
    /// use crontab_lite::schedule::entry::ScheduleEntry;
    /// use crontab_lite::schedule::field::TimeField;
    ///
    /// let entry = ScheduleEntry::parse("30 * run backup").unwrap();
    /// assert_eq!(entry.minute, TimeField::Specific(30));
    /// assert_eq!(entry.hour, TimeField::Wildcard);
    /// assert_eq!(entry.command, "run backup");
    ///
    /// assert!(ScheduleEntry::parse("60 0 too-late").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, ScheduleError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ScheduleError::InvalidEntry);
        }

        let minute = TimeField::parse(FieldKind::Minute, tokens[0]).map_err(Self::reject)?;
        let hour = TimeField::parse(FieldKind::Hour, tokens[1]).map_err(Self::reject)?;
        let command = tokens[2..].join(" ");

        Ok(ScheduleEntry {
            minute,
            hour,
            command,
        })
    }

    // Collapse a field-level cause into the line-level error
    fn reject(_cause: ScheduleError) -> ScheduleError {
        #[cfg(feature = "tracing")]
        tracing::debug!(cause = %_cause, "time field rejected");
        ScheduleError::InvalidEntry
    }
}

impl FromStr for ScheduleEntry {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScheduleEntry::parse(s)
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.minute, self.hour, self.command)
    }
}
