//! Validation utilities for the inventory management backend

use rust_decimal::Decimal;

/// Validate a ledger quantity (purchases and sales must move stock)
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Product name must not be empty");
    }
    if trimmed.len() > 200 {
        return Err("Product name must be at most 200 characters");
    }
    Ok(())
}

/// Validate a product unit price
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate an uploaded file name before it is written under the upload
/// directory. Names are used verbatim as the on-disk key, so anything that
/// could escape the directory is rejected.
pub fn validate_upload_filename(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("File name must not be empty");
    }
    if name.len() > 255 {
        return Err("File name must be at most 255 characters");
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err("File name must not contain path separators");
    }
    if name.starts_with('.') {
        return Err("File name must not be hidden");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}
