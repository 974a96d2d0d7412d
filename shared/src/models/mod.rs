//! Data models
//!
//! Shared between layout-server and the floor editor GUI (via API).
//! Rooms and tables are keyed by `name` on every lookup path; `id` is an
//! opaque token assigned at creation time.

pub mod payload;
pub mod room;
pub mod table;

// Re-exports
pub use payload::*;
pub use room::*;
pub use table::*;
