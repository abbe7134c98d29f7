//! Database models for the inventory management backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
