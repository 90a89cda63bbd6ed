//! Core data types shared by the loader, the comparator and the unused-key finder.
//!
//! ## Module Structure
//!
//! - `message`: Locale file and key types (LocaleFile, KeyEntry, MessageSet)
//! - `comparison`: Per-locale comparison results

pub mod comparison;
pub mod message;

pub use comparison::{ComparisonResult, KeyStatus, LocaleComparison};
pub use message::{KeyEntry, LocaleFile, MessageEntry, MessageSet, render_value};
