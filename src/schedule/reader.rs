use std::io::BufRead;

use crate::schedule::entry::ScheduleEntry;
use crate::schedule::error::ScheduleError;

/// Schedule entries in the order their lines were read.
pub type Schedule = Vec<ScheduleEntry>;

/// Reads crontab lines from `input` until end-of-stream.
///
/// Lines are parsed in order and accumulated into a [`Schedule`]. The
/// first line that fails to parse aborts the read: the error is
/// returned immediately, no further lines are consumed and no partial
/// schedule is reported.
///
/// # Errors
///
/// Returns the error of the first rejected line (see
/// [`ScheduleEntry::parse`]), or [`ScheduleError::Io`] if reading from
/// `input` fails.
///
/// # Examples
/// ```rust
/// use crontab_lite::schedule::reader::read_schedule;
///
/// let schedule = read_schedule("0 5 backup.sh\n* * poll-queue\n".as_bytes()).unwrap();
/// assert_eq!(schedule.len(), 2);
///
/// assert!(read_schedule("0 5 ok\n99 5 bad\n".as_bytes()).is_err());
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip(input)))]
pub fn read_schedule<R: BufRead>(input: R) -> Result<Schedule, ScheduleError> {
    let mut schedule = Schedule::new();
    for (_index, line) in input.lines().enumerate() {
        let line = line?;
        match ScheduleEntry::parse(&line) {
            Ok(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(line = _index + 1, entry = %entry, "line accepted");
                schedule.push(entry);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(line = _index + 1, "rejecting crontab input");
                return Err(e);
            }
        }
    }
    Ok(schedule)
}
