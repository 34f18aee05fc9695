//! Utils - small shared helpers (logging)

#[macro_use]
pub mod log;
