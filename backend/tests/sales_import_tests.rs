//! Sales import pipeline tests
//!
//! Exercises the shared CSV contract used by the sync endpoint and the async
//! worker, and the all-or-nothing ingestion policy:
//! - Property 6: importing N well-formed rows yields exactly N sales rows,
//!   each referencing the import file; a 0-row file succeeds with none.

use proptest::prelude::*;
use uuid::Uuid;

use shared::import::{parse_sales_csv, CsvImportError, SalesCsvRow};
use shared::types::SalesFileStatus;

/// In-memory stand-in for the ingestion transaction: parse everything first,
/// then either persist the import record plus all rows, or nothing.
struct ImportOutcome {
    file_id: Uuid,
    status: SalesFileStatus,
    sales: Vec<(Uuid, SalesCsvRow)>,
}

fn ingest_sync(data: &[u8]) -> Result<ImportOutcome, CsvImportError> {
    let rows = parse_sales_csv(data)?;
    let file_id = Uuid::new_v4();
    let sales = rows.into_iter().map(|row| (file_id, row)).collect();
    Ok(ImportOutcome {
        file_id,
        status: SalesFileStatus::SyncProcessed,
        sales,
    })
}

fn csv_with_rows(rows: &[(Uuid, &str, i32)]) -> Vec<u8> {
    let mut data = String::from("product,date,quantity\n");
    for (product, date, quantity) in rows {
        data.push_str(&format!("{},{},{}\n", product, date, quantity));
    }
    data.into_bytes()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn import_of_n_rows_creates_n_sales() {
    let product = Uuid::new_v4();
    let data = csv_with_rows(&[
        (product, "2024-01-10", 3),
        (product, "2024-01-11", 2),
        (product, "2024-02-01", 5),
    ]);

    let outcome = ingest_sync(&data).unwrap();
    assert_eq!(outcome.sales.len(), 3);
    assert_eq!(outcome.status, SalesFileStatus::SyncProcessed);
    // Every imported sale references the import file
    assert!(outcome.sales.iter().all(|(id, _)| *id == outcome.file_id));
}

#[test]
fn empty_import_succeeds_with_zero_sales() {
    let outcome = ingest_sync(b"product,date,quantity\n").unwrap();
    assert!(outcome.sales.is_empty());
    assert_eq!(outcome.status, SalesFileStatus::SyncProcessed);
}

#[test]
fn missing_column_fails_whole_batch() {
    let product = Uuid::new_v4();
    let data = format!("product,quantity\n{},3\n", product);

    let result = ingest_sync(data.as_bytes());
    assert!(matches!(result, Err(CsvImportError::MissingColumn("date"))));
}

#[test]
fn one_bad_row_fails_whole_batch() {
    let product = Uuid::new_v4();
    let mut data = csv_with_rows(&[(product, "2024-01-10", 3)]);
    data.extend_from_slice(b"not-a-uuid,2024-01-11,2\n");

    // The good first row must not survive the bad second row
    assert!(ingest_sync(&data).is_err());
}

#[test]
fn async_registration_is_not_terminal() {
    // The async path only records the file; the worker owns the transition
    // to async_processed or async_failed.
    let status = SalesFileStatus::AsyncUnprocessed;
    assert!(!status.is_terminal());
    assert!(SalesFileStatus::AsyncProcessed.is_terminal());
    assert!(SalesFileStatus::AsyncFailed.is_terminal());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn date_strategy() -> impl Strategy<Value = String> {
    (2020i32..=2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn row_strategy() -> impl Strategy<Value = (String, i32)> {
    (date_strategy(), 1i32..=10_000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 6: N well-formed rows always produce exactly N sales.
    #[test]
    fn prop_row_count_is_preserved(
        rows in prop::collection::vec(row_strategy(), 0..30)
    ) {
        let product = Uuid::new_v4();
        let mut data = String::from("product,date,quantity\n");
        for (date, quantity) in &rows {
            data.push_str(&format!("{},{},{}\n", product, date, quantity));
        }

        let outcome = ingest_sync(data.as_bytes()).unwrap();
        prop_assert_eq!(outcome.sales.len(), rows.len());
    }

    /// Parsed rows faithfully carry quantity and date.
    #[test]
    fn prop_rows_parse_faithfully(
        (date, quantity) in row_strategy()
    ) {
        let product = Uuid::new_v4();
        let data = format!("product,date,quantity\n{},{},{}\n", product, date, quantity);

        let rows = parse_sales_csv(data.as_bytes()).unwrap();
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].product, product);
        prop_assert_eq!(rows[0].quantity, quantity);
        prop_assert_eq!(rows[0].date.to_string(), date);
    }

    /// A non-positive quantity anywhere in the file fails the batch.
    #[test]
    fn prop_non_positive_quantity_fails_batch(
        good in prop::collection::vec(row_strategy(), 0..10),
        bad_quantity in -1000i32..=0,
    ) {
        let product = Uuid::new_v4();
        let mut data = String::from("product,date,quantity\n");
        for (date, quantity) in &good {
            data.push_str(&format!("{},{},{}\n", product, date, quantity));
        }
        data.push_str(&format!("{},2024-06-01,{}\n", product, bad_quantity));

        prop_assert!(ingest_sync(data.as_bytes()).is_err());
    }
}
