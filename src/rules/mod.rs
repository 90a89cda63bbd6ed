//! Rule implementations for keyaudit.
//!
//! ## Module Structure
//!
//! - `compare`: Missing and extraneous keys per locale, against the baseline
//! - `unused`: Baseline keys with no occurrence in the search tree

pub mod compare;
pub mod unused;
