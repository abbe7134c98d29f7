//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Processing state of a bulk sales import
///
/// Synchronous imports are parsed within the request and land directly in
/// `SyncProcessed`. Asynchronous imports start in `AsyncUnprocessed`; an
/// external worker moves them to one of the terminal states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SalesFileStatus {
    SyncProcessed,
    AsyncUnprocessed,
    AsyncProcessed,
    AsyncFailed,
}

impl SalesFileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesFileStatus::SyncProcessed => "sync_processed",
            SalesFileStatus::AsyncUnprocessed => "async_unprocessed",
            SalesFileStatus::AsyncProcessed => "async_processed",
            SalesFileStatus::AsyncFailed => "async_failed",
        }
    }

    /// Whether an asynchronous import worker is done with this file
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SalesFileStatus::AsyncUnprocessed)
    }
}

impl std::str::FromStr for SalesFileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync_processed" => Ok(SalesFileStatus::SyncProcessed),
            "async_unprocessed" => Ok(SalesFileStatus::AsyncUnprocessed),
            "async_processed" => Ok(SalesFileStatus::AsyncProcessed),
            "async_failed" => Ok(SalesFileStatus::AsyncFailed),
            other => Err(format!("unknown sales file status: {}", other)),
        }
    }
}

/// Kind of row in the combined inventory view of a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryRecordType {
    Purchase,
    Sales,
}

impl std::str::FromStr for InventoryRecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "purchase" => Ok(InventoryRecordType::Purchase),
            "sales" => Ok(InventoryRecordType::Sales),
            other => Err(format!("unexpected ledger record type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            SalesFileStatus::SyncProcessed,
            SalesFileStatus::AsyncUnprocessed,
            SalesFileStatus::AsyncProcessed,
            SalesFileStatus::AsyncFailed,
        ] {
            assert_eq!(SalesFileStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(SalesFileStatus::from_str("processed").is_err());
    }

    #[test]
    fn record_type_parses_from_ledger_labels() {
        assert_eq!(
            InventoryRecordType::from_str("purchase"),
            Ok(InventoryRecordType::Purchase)
        );
        assert_eq!(
            InventoryRecordType::from_str("sales"),
            Ok(InventoryRecordType::Sales)
        );
        assert!(InventoryRecordType::from_str("refund").is_err());
    }

    #[test]
    fn only_async_unprocessed_is_non_terminal() {
        assert!(!SalesFileStatus::AsyncUnprocessed.is_terminal());
        assert!(SalesFileStatus::SyncProcessed.is_terminal());
        assert!(SalesFileStatus::AsyncProcessed.is_terminal());
        assert!(SalesFileStatus::AsyncFailed.is_terminal());
    }
}
