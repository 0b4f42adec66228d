//! The cash book: a named, independent ledger with its own opening balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{common::Identifiable, NAME_MAX_LEN, TEXT_MAX_LEN},
    errors::StoreError,
    utils,
};

/// A named ledger tracking an opening balance plus its transaction and debt
/// history. Wire field names match the persisted layout of the original app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashBook {
    pub id: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
    #[serde(rename = "saldoAwal")]
    pub opening_balance: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl CashBook {
    /// Creates a cash book with a fresh id and creation timestamp.
    pub fn new(name: impl Into<String>, description: impl Into<String>, opening_balance: i64) -> Self {
        Self {
            id: utils::generate_id(),
            name: name.into(),
            description: description.into(),
            opening_balance,
            created_at: Utc::now(),
        }
    }

    /// Checks the data-model invariants before the record enters the store.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.is_empty() {
            return Err(StoreError::Validation("cash book id must not be empty".into()));
        }
        if self.name.is_empty() {
            return Err(StoreError::Validation("cash book name must not be empty".into()));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(StoreError::Validation(format!(
                "cash book name exceeds {NAME_MAX_LEN} characters"
            )));
        }
        if self.description.chars().count() > TEXT_MAX_LEN {
            return Err(StoreError::Validation(format!(
                "cash book description exceeds {TEXT_MAX_LEN} characters"
            )));
        }
        if self.opening_balance < 0 {
            return Err(StoreError::Validation(
                "opening balance must not be negative".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for CashBook {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cash_book_passes_validation() {
        let book = CashBook::new("Warung", "daily shop ledger", 1_000_000);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn negative_opening_balance_is_rejected() {
        let mut book = CashBook::new("Warung", "", 0);
        book.opening_balance = -1;
        assert!(matches!(book.validate(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let book = CashBook::new("k".repeat(NAME_MAX_LEN + 1), "", 0);
        assert!(matches!(book.validate(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn serializes_with_original_field_names() {
        let book = CashBook::new("Kas Toko", "toko kelontong", 500_000);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["nama"], "Kas Toko");
        assert_eq!(json["deskripsi"], "toko kelontong");
        assert_eq!(json["saldoAwal"], 500_000);
        assert!(json["createdAt"].is_string());
    }
}
