//! Systems - per-tick rules applied to grid cells

pub mod behaviors;
