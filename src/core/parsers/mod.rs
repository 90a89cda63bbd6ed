//! File parsers for locale message files.
//!
//! - `json`: JSON message file discovery and loading

pub mod json;
