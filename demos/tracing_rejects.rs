//! Example: print tracing messages while a crontab is read
use crontab_lite::schedule::reader::read_schedule;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let input = "0 5 backup.sh\n61 5 out-of-range\n";
    match read_schedule(input.as_bytes()) {
        Ok(schedule) => println!("parsed {} entries", schedule.len()),
        Err(e) => eprintln!("Error: {e}"),
    }
}
