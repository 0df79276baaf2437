use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::schedule::entry::ScheduleEntry;
use crate::schedule::error::ScheduleError;
use crate::schedule::reader::Schedule;

/// Async flavor of [`read_schedule`](crate::schedule::reader::read_schedule).
///
/// Same fail-fast contract over a tokio buffered reader: entries
/// accumulate in read order and the first bad line aborts the read.
/// Parsing itself never suspends; only the line reads do.
///
/// # Errors
///
/// Returns the error of the first rejected line, or
/// [`ScheduleError::Io`] if reading from `input` fails.
///
/// # Examples
/// ```rust
/// use crontab_lite::schedule::async_tokio;
/// use crontab_lite::schedule::error::ScheduleError;
///
/// #[tokio::main]
/// async fn main() -> Result<(), ScheduleError> {
///     let schedule = async_tokio::read_schedule("0 5 backup.sh\n".as_bytes()).await?;
///     assert_eq!(schedule[0].command, "backup.sh");
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip(input)))]
pub async fn read_schedule<R>(input: R) -> Result<Schedule, ScheduleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut schedule = Schedule::new();
    while let Some(line) = lines.next_line().await? {
        schedule.push(ScheduleEntry::parse(&line)?);
    }
    Ok(schedule)
}
