//! Shared types for the MOPAS membership service
//!
//! Common types used by the server crate and its tests: the unified
//! error system, the member domain models and small utilities.

pub mod error;
pub mod models;
pub mod util;
