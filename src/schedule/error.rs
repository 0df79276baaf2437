use std::io;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Token is neither the wildcard marker nor an in-range integer
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Line has too few fields or a time field failed validation
    #[error("invalid crontab entry")]
    InvalidEntry,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<io::Error> for ScheduleError {
    fn from(err: io::Error) -> Self {
        ScheduleError::Io(err.to_string())
    }
}
