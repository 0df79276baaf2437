use std::fmt;

use crate::schedule::error::ScheduleError;

/// Selects which bound applies when validating a time token.
///
/// The kind is consumed during validation; the resulting [`TimeField`]
/// does not remember which kind produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Minute,
    Hour,
}

impl FieldKind {
    // Exclusive upper bound: minutes run 0..60, hours 0..24
    fn limit(self) -> i64 {
        match self {
            FieldKind::Minute => 60,
            FieldKind::Hour => 24,
        }
    }
}

/// A validated minute-or-hour value from a crontab line.
///
/// Either a specific value inside the bound for its kind, or the `*`
/// wildcard meaning "any value". Constructed once via
/// [`TimeField::parse`] and immutable afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// A specific in-range value
    Specific(u8),
    /// The `*` marker
    Wildcard,
}

impl TimeField {
    /// Validates a single token as a time field of the given kind.
    ///
    /// The wildcard marker `*` is accepted unconditionally, before any
    /// numeric parsing. Every other token must parse as a base-10
    /// integer inside the kind's bound. Tokens are expected to arrive
    /// already split on whitespace; no trimming happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidNumber`] carrying the offending
    /// token if it is neither the wildcard nor an in-range integer.
    /// Unparseable and out-of-range tokens are not distinguished.
    ///
    /// # Examples
    /// ```rust
    /// use crontab_lite::schedule::field::{FieldKind, TimeField};
    ///
    /// assert_eq!(
    ///     TimeField::parse(FieldKind::Minute, "30").unwrap(),
    ///     TimeField::Specific(30)
    /// );
    /// assert_eq!(
    ///     TimeField::parse(FieldKind::Hour, "*").unwrap(),
    ///     TimeField::Wildcard
    /// );
    /// assert!(TimeField::parse(FieldKind::Hour, "24").is_err());
    /// ```
    pub fn parse(kind: FieldKind, token: &str) -> Result<Self, ScheduleError> {
        if token == "*" {
            return Ok(TimeField::Wildcard);
        }
        match token.parse::<i64>() {
            Ok(value) if (0..kind.limit()).contains(&value) => Ok(TimeField::Specific(value as u8)),
            _ => Err(ScheduleError::InvalidNumber(token.to_string())),
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Specific(value) => write!(f, "{value}"),
            TimeField::Wildcard => f.write_str("*"),
        }
    }
}
