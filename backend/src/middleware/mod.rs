//! HTTP middleware for the inventory management backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
