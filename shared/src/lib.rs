//! Shared types and models for the inventory management backend
//!
//! This crate contains types shared between the backend and other components
//! of the system, such as the asynchronous sales-import worker.

pub mod import;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
