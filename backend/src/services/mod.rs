//! Business logic services for the inventory management backend

pub mod auth;
pub mod inventory;
pub mod product;
pub mod purchase;
pub mod sales;
pub mod sales_import;

pub use auth::AuthService;
pub use inventory::InventoryService;
pub use product::ProductService;
pub use purchase::PurchaseService;
pub use sales::SalesService;
pub use sales_import::SalesImportService;
