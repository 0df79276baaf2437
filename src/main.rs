//! Thin stdin driver: reads a crontab from standard input and prints the
//! parsed schedule. Any bad line aborts the run with a non-zero exit
//! status before anything is printed.
use std::io;
use std::process::ExitCode;

use crontab_lite::schedule::reader::read_schedule;

fn main() -> ExitCode {
    match read_schedule(io::stdin().lock()) {
        Ok(schedule) => {
            for entry in &schedule {
                println!("{entry}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("crontab-lite: {e}");
            ExitCode::FAILURE
        }
    }
}
