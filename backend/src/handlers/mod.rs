//! HTTP handlers for the inventory management backend

mod auth;
mod inventory;
mod product;
mod purchase;
mod sales;

pub use auth::*;
pub use inventory::*;
pub use product::*;
pub use purchase::*;
pub use sales::*;
