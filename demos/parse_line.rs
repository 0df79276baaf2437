//! Example: parse single crontab lines and print the outcome
use crontab_lite::schedule::entry::ScheduleEntry;

fn main() {
    let lines = ["30 12 echo hi", "* * run backup", "99 5 out-of-range"];

    for line in lines {
        match ScheduleEntry::parse(line) {
            Ok(entry) => println!("accepted: {entry}"),
            Err(e) => println!("rejected {line:?}: {e}"),
        }
    }
}
