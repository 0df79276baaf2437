mod reader;
#[cfg(feature = "serde")]
mod serialize;
