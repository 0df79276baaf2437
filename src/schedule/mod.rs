#[cfg(feature = "tokio")]
pub mod async_tokio;

pub mod entry;
pub mod error;
pub mod field;
pub mod reader;

#[cfg(test)]
mod unit_tests;
