//! Command implementations for the setlist CLI

pub mod config;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use serve::run_serve;
