//! Utility modules for the record codec.

pub mod datetime;

pub use datetime::{format_rfc3339_utc, parse_rfc3339};
