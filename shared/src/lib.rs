//! Shared types for the floor layout service
//!
//! Wire models and layout-merge semantics used by both the layout server
//! and GUI callers consuming its API.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
