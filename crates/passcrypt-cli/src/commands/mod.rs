//! Command handlers, one module per command group.

pub mod config;
pub mod crypt;
pub mod envelope;
pub mod misc;
pub mod random;
