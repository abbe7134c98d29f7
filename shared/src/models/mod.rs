//! Domain models for the inventory management backend

mod product;
mod purchase;
mod sales;
mod sales_file;

pub use product::*;
pub use purchase::*;
pub use sales::*;
pub use sales_file::*;
