//! Example: read a crontab from standard input with the async reader
use crontab_lite::schedule::async_tokio;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = BufReader::new(tokio::io::stdin());
    let schedule = async_tokio::read_schedule(stdin).await?;

    for entry in &schedule {
        println!("{entry}");
    }
    Ok(())
}
