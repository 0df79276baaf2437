use std::io::{self, BufReader, Read};

use crate::schedule::{error::ScheduleError, field::TimeField, reader::read_schedule};

// Stream that fails as soon as anything tries to read from it
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stream read past failure"))
    }
}

#[test]
fn accumulate_entries_in_read_order() {
    let input = "0 5 backup.sh\n* * noop\n";
    let schedule = read_schedule(input.as_bytes()).unwrap();

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].minute, TimeField::Specific(0));
    assert_eq!(schedule[0].hour, TimeField::Specific(5));
    assert_eq!(schedule[0].command, "backup.sh");
    assert_eq!(schedule[1].minute, TimeField::Wildcard);
    assert_eq!(schedule[1].hour, TimeField::Wildcard);
    assert_eq!(schedule[1].command, "noop");
}

#[test]
fn empty_input_yields_empty_schedule() {
    let schedule = read_schedule("".as_bytes()).unwrap();
    assert!(schedule.is_empty());
}

#[test]
fn missing_trailing_newline_still_parses() {
    let schedule = read_schedule("0 5 backup.sh".as_bytes()).unwrap();
    assert_eq!(schedule.len(), 1);
}

#[test]
fn fail_fast_on_first_bad_line() {
    let input = "0 5 ok\n99 5 bad\n* * never-reached\n";
    match read_schedule(input.as_bytes()) {
        Err(ScheduleError::InvalidEntry) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn stop_reading_after_failure() {
    // The bad line must abort the read before the stream is touched
    // again; an eager reader would surface the IO error instead.
    let input = "0 5 ok\n99 5 bad\n".as_bytes().chain(FailingReader);
    match read_schedule(BufReader::new(input)) {
        Err(ScheduleError::InvalidEntry) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn io_error_surfaces() {
    match read_schedule(BufReader::new(FailingReader)) {
        Err(ScheduleError::Io(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
