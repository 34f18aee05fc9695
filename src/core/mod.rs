//! Core - crate-wide helpers
//!
//! Declared first in lib.rs so the logging macros are visible to every other module.

#[macro_use]
pub mod utils;
