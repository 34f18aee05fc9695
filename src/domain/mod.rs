//! Domain - material definitions, the prototype registry and config loading

pub mod material;
pub mod registry;
pub mod config;
