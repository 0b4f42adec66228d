//! Income and expense transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        category::Category,
        common::{Identifiable, OwnedByCashBook},
        TEXT_MAX_LEN,
    },
    errors::StoreError,
    utils,
};

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "pemasukan")]
    Income,
    #[serde(rename = "pengeluaran")]
    Expense,
}

/// One dated income or expense event belonging to exactly one cash book.
///
/// The persisted layout keeps the original wire shape (`tipe` + `kategori` as
/// separate fields); in memory the pair collapses into [`Category`], which
/// carries the kind, so a mismatched kind/category pair cannot be
/// constructed. Rehydration re-validates the pair via `TryFrom`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawTransaction", into = "RawTransaction")]
pub struct Transaction {
    pub id: String,
    pub cash_book_id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub category: Category,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction with a fresh id and creation timestamp.
    pub fn new(
        cash_book_id: impl Into<String>,
        date: NaiveDate,
        amount: i64,
        category: Category,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: utils::generate_id(),
            cash_book_id: cash_book_id.into(),
            date,
            amount,
            category,
            note: note.into(),
            created_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    /// Checks the data-model invariants before the record enters the store.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.is_empty() {
            return Err(StoreError::Validation("transaction id must not be empty".into()));
        }
        if self.cash_book_id.is_empty() {
            return Err(StoreError::Validation(
                "transaction cash book id must not be empty".into(),
            ));
        }
        if self.amount <= 0 {
            return Err(StoreError::Validation(
                "transaction amount must be positive".into(),
            ));
        }
        if self.note.chars().count() > TEXT_MAX_LEN {
            return Err(StoreError::Validation(format!(
                "transaction note exceeds {TEXT_MAX_LEN} characters"
            )));
        }
        Ok(())
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OwnedByCashBook for Transaction {
    fn cash_book_id(&self) -> &str {
        &self.cash_book_id
    }
}

/// Persisted shape of a transaction, matching the original storage layout.
#[derive(Serialize, Deserialize)]
struct RawTransaction {
    id: String,
    #[serde(rename = "bukuKasId")]
    cash_book_id: String,
    #[serde(rename = "tipe")]
    kind: TransactionKind,
    #[serde(rename = "tanggal")]
    date: NaiveDate,
    #[serde(rename = "jumlah")]
    amount: i64,
    #[serde(rename = "kategori")]
    category: String,
    #[serde(rename = "keterangan", default)]
    note: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl From<Transaction> for RawTransaction {
    fn from(txn: Transaction) -> Self {
        Self {
            id: txn.id,
            cash_book_id: txn.cash_book_id,
            kind: txn.category.kind(),
            date: txn.date,
            amount: txn.amount,
            category: txn.category.label().to_string(),
            note: txn.note,
            created_at: txn.created_at,
        }
    }
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = StoreError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let category = Category::parse(raw.kind, &raw.category).ok_or_else(|| {
            StoreError::Validation(format!(
                "unknown {:?} category `{}`",
                raw.kind, raw.category
            ))
        })?;
        Ok(Self {
            id: raw.id,
            cash_book_id: raw.cash_book_id,
            date: raw.date,
            amount: raw.amount,
            category,
            note: raw.note,
            created_at: raw.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{ExpenseCategory, IncomeCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn wire_shape_keeps_original_field_names() {
        let txn = Transaction::new(
            "bk1",
            date(2026, 3, 14),
            75_000,
            Category::Expense(ExpenseCategory::FoodAndDrink),
            "lunch",
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["bukuKasId"], "bk1");
        assert_eq!(json["tipe"], "pengeluaran");
        assert_eq!(json["tanggal"], "2026-03-14");
        assert_eq!(json["jumlah"], 75_000);
        assert_eq!(json["kategori"], "Food & Drink");
        assert_eq!(json["keterangan"], "lunch");
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let txn = Transaction::new(
            "bk1",
            date(2026, 1, 2),
            500_000,
            Category::Income(IncomeCategory::Salary),
            "",
        );
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn mismatched_kind_and_category_fail_rehydration() {
        let json = r#"{
            "id": "t1",
            "bukuKasId": "bk1",
            "tipe": "pemasukan",
            "tanggal": "2026-01-02",
            "jumlah": 1000,
            "kategori": "Food & Drink",
            "keterangan": "",
            "createdAt": "2026-01-02T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn other_rehydrates_into_the_right_vocabulary() {
        let json = r#"{
            "id": "t2",
            "bukuKasId": "bk1",
            "tipe": "pengeluaran",
            "tanggal": "2026-01-02",
            "jumlah": 1000,
            "kategori": "Other",
            "keterangan": "",
            "createdAt": "2026-01-02T00:00:00Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.category, Category::Expense(ExpenseCategory::Other));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut txn = Transaction::new(
            "bk1",
            date(2026, 1, 2),
            1,
            Category::Income(IncomeCategory::Gift),
            "",
        );
        txn.amount = 0;
        assert!(matches!(txn.validate(), Err(StoreError::Validation(_))));
    }
}
