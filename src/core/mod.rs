//! Core audit engine.
//!
//! Loads locale files, walks the search tree and writes CSV reports. Nothing
//! in here prints; progress goes through [`progress::ProgressSink`].
//!
//! ## Module Structure
//!
//! - `data`: Locale files, key entries and comparison results
//! - `parsers`: JSON locale file discovery and loading
//! - `file_scanner`: Search tree walking with ignore patterns
//! - `progress`: Progress events and sinks
//! - `reports`: CSV report emitters

pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod progress;
pub mod reports;

pub use data::*;
