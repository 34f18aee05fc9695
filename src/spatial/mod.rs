//! Spatial - slot storage and update scheduling

pub mod grid;
pub mod update_queue;
