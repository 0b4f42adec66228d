//! Receivable/payable debt records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{Identifiable, OwnedByCashBook},
        NAME_MAX_LEN,
    },
    errors::StoreError,
    utils,
};

/// Settlement state of a debt. Wire tokens match the original storage layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DebtStatus {
    #[serde(rename = "belum_lunas")]
    Unpaid,
    #[serde(rename = "lunas")]
    Paid,
}

impl DebtStatus {
    pub fn toggled(self) -> Self {
        match self {
            DebtStatus::Unpaid => DebtStatus::Paid,
            DebtStatus::Paid => DebtStatus::Unpaid,
        }
    }
}

/// A dated receivable/payable record belonging to exactly one cash book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: String,
    #[serde(rename = "bukuKasId")]
    pub cash_book_id: String,
    #[serde(rename = "namaPihak")]
    pub counterparty_name: String,
    #[serde(rename = "jumlah")]
    pub amount: i64,
    #[serde(rename = "tanggal")]
    pub date: NaiveDate,
    pub status: DebtStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Debt {
    /// Creates an unpaid debt with a fresh id and creation timestamp.
    pub fn new(
        cash_book_id: impl Into<String>,
        counterparty_name: impl Into<String>,
        amount: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: utils::generate_id(),
            cash_book_id: cash_book_id.into(),
            counterparty_name: counterparty_name.into(),
            amount,
            date,
            status: DebtStatus::Unpaid,
            created_at: Utc::now(),
        }
    }

    /// Checks the data-model invariants before the record enters the store.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.is_empty() {
            return Err(StoreError::Validation("debt id must not be empty".into()));
        }
        if self.cash_book_id.is_empty() {
            return Err(StoreError::Validation(
                "debt cash book id must not be empty".into(),
            ));
        }
        if self.counterparty_name.is_empty() {
            return Err(StoreError::Validation(
                "debt counterparty name must not be empty".into(),
            ));
        }
        if self.counterparty_name.chars().count() > NAME_MAX_LEN {
            return Err(StoreError::Validation(format!(
                "debt counterparty name exceeds {NAME_MAX_LEN} characters"
            )));
        }
        if self.amount <= 0 {
            return Err(StoreError::Validation("debt amount must be positive".into()));
        }
        Ok(())
    }
}

impl Identifiable for Debt {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OwnedByCashBook for Debt {
    fn cash_book_id(&self) -> &str {
        &self.cash_book_id
    }
}
