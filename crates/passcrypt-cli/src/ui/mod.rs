//! UI primitives for the Passcrypt CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens
//! - **Render**: Badges, key/value lines, error messages

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, kv, print_error};
