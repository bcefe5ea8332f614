//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod contribution;
pub mod member;

// Re-exports
pub use contribution::*;
pub use member::*;
