//! keyaudit - i18n key set auditor
//!
//! keyaudit is a CLI tool and library for auditing translation key sets stored
//! as flat JSON files, one directory per locale. It finds keys that a locale
//! is missing or has in excess compared to the baseline locale, and baseline
//! keys that never appear in a source tree. Results are written as CSV reports.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Loader, search tree walker, progress events and report emitters
//! - `csv_writer`: Quoted CSV output
//! - `rules`: Locale comparison and unused-key detection

pub mod cli;
pub mod config;
pub mod core;
pub mod csv_writer;
pub mod rules;
