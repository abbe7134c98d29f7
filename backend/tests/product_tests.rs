//! Product catalog tests
//!
//! Self-contained mirror of the catalog service's error contract:
//! - Property 3: an unknown product id yields a not-found error, listing
//!   returns every product, and malformed input is a validation error
//!   distinct from not-found.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::validation::{validate_price, validate_product_name};
use uuid::Uuid;

/// Error classes the catalog endpoints distinguish. Not-found maps to 404,
/// validation to 400 with the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogError {
    NotFound,
    Validation { field: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
struct CatalogProduct {
    id: Uuid,
    name: String,
    price: Decimal,
}

/// In-memory stand-in for the products table with the same validate-first,
/// then-lookup ordering the service uses.
#[derive(Debug, Default)]
struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    fn create(&mut self, name: &str, price: Decimal) -> Result<CatalogProduct, CatalogError> {
        Self::validate(name, price)?;
        let product = CatalogProduct {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            price,
        };
        self.products.push(product.clone());
        Ok(product)
    }

    fn get(&self, id: Uuid) -> Result<&CatalogProduct, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)
    }

    fn list(&self) -> &[CatalogProduct] {
        &self.products
    }

    fn update(
        &mut self,
        id: Uuid,
        name: &str,
        price: Decimal,
    ) -> Result<&CatalogProduct, CatalogError> {
        Self::validate(name, price)?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;
        product.name = name.trim().to_string();
        product.price = price;
        Ok(product)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), CatalogError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    fn validate(name: &str, price: Decimal) -> Result<(), CatalogError> {
        validate_product_name(name).map_err(|_| CatalogError::Validation { field: "name" })?;
        validate_price(price).map_err(|_| CatalogError::Validation { field: "price" })?;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn unknown_id_is_not_found() {
    let mut catalog = Catalog::default();
    catalog.create("Arabica beans 1kg", Decimal::new(1999, 2)).unwrap();

    let err = catalog.get(Uuid::new_v4()).unwrap_err();
    assert_eq!(err, CatalogError::NotFound);
}

#[test]
fn list_returns_the_full_set() {
    let mut catalog = Catalog::default();
    let a = catalog.create("Arabica beans 1kg", Decimal::new(1999, 2)).unwrap();
    let b = catalog.create("Robusta beans 1kg", Decimal::new(1499, 2)).unwrap();

    let listed = catalog.list();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&a));
    assert!(listed.contains(&b));
}

#[test]
fn malformed_input_is_validation_not_not_found() {
    let mut catalog = Catalog::default();

    let err = catalog.create("   ", Decimal::ONE).unwrap_err();
    assert_eq!(err, CatalogError::Validation { field: "name" });

    let err = catalog.create("Arabica beans 1kg", Decimal::new(-1, 0)).unwrap_err();
    assert_eq!(err, CatalogError::Validation { field: "price" });
    assert_ne!(err, CatalogError::NotFound);
}

#[test]
fn update_validates_before_looking_up() {
    let mut catalog = Catalog::default();

    // Bad input against an unknown id reports the input problem
    let err = catalog.update(Uuid::new_v4(), "", Decimal::ONE).unwrap_err();
    assert_eq!(err, CatalogError::Validation { field: "name" });

    // Well-formed input against an unknown id is not-found
    let err = catalog
        .update(Uuid::new_v4(), "Arabica beans 1kg", Decimal::ONE)
        .unwrap_err();
    assert_eq!(err, CatalogError::NotFound);
}

#[test]
fn delete_of_unknown_id_is_not_found() {
    let mut catalog = Catalog::default();
    let product = catalog.create("Arabica beans 1kg", Decimal::ONE).unwrap();

    assert!(catalog.delete(product.id).is_ok());
    assert_eq!(catalog.delete(product.id).unwrap_err(), CatalogError::NotFound);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Every created product is retrievable by its id and present in the list.
    #[test]
    fn prop_created_products_are_listed_and_retrievable(
        names in prop::collection::vec("[a-zA-Z][a-zA-Z0-9 ]{0,30}", 1..10)
    ) {
        let mut catalog = Catalog::default();
        let mut created = Vec::new();
        for name in &names {
            created.push(catalog.create(name, Decimal::ONE).unwrap());
        }

        prop_assert_eq!(catalog.list().len(), names.len());
        for product in &created {
            prop_assert_eq!(catalog.get(product.id).unwrap(), product);
        }
    }

    /// An id that was never issued is always not-found.
    #[test]
    fn prop_unissued_id_is_not_found(
        bytes in prop::array::uniform16(any::<u8>())
    ) {
        let mut catalog = Catalog::default();
        catalog.create("Arabica beans 1kg", Decimal::ONE).unwrap();

        let unknown_id = Uuid::from_bytes(bytes);
        if catalog.list().iter().all(|p| p.id != unknown_id) {
            prop_assert_eq!(catalog.get(unknown_id).unwrap_err(), CatalogError::NotFound);
        }
    }
}
