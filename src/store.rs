//! Durable CRUD for the three entity collections, with cascade-delete
//! integrity.
//!
//! Every mutation rewrites the whole affected collection on the storage
//! port. A mutex around the port turns each compound operation (notably the
//! cascade delete, which touches all three collections) into a critical
//! section, so a multi-threaded host can never observe a cash book without
//! its dependents or the reverse.

use std::sync::{Mutex, MutexGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    domain::{CashBook, Debt, DebtStatus, Identifiable, OwnedByCashBook, Transaction},
    errors::StoreError,
    storage::StoragePort,
    summary::Summary,
    utils,
};

pub const CASH_BOOKS_KEY: &str = "buku_kas_data";
pub const TRANSACTIONS_KEY: &str = "transaksi_data";
pub const DEBTS_KEY: &str = "utang_data";

/// Owns all persisted cash books, transactions, and debts behind an injected
/// storage port.
pub struct LedgerStore<S: StoragePort> {
    port: Mutex<S>,
}

impl<S: StoragePort> LedgerStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            port: Mutex::new(storage),
        }
    }

    /// Returns a fresh identifier for a record about to be created.
    pub fn generate_id(&self) -> String {
        utils::generate_id()
    }

    pub fn list_cash_books(&self) -> Result<Vec<CashBook>, StoreError> {
        read_collection(&mut *self.port(), CASH_BOOKS_KEY)
    }

    pub fn get_cash_book(&self, id: &str) -> Result<Option<CashBook>, StoreError> {
        let books: Vec<CashBook> = read_collection(&mut *self.port(), CASH_BOOKS_KEY)?;
        Ok(books.into_iter().find(|book| book.id == id))
    }

    pub fn create_cash_book(&self, book: CashBook) -> Result<(), StoreError> {
        book.validate()?;
        create_record(&mut *self.port(), CASH_BOOKS_KEY, book, "cash book")
    }

    pub fn update_cash_book(&self, book: CashBook) -> Result<(), StoreError> {
        book.validate()?;
        update_record(&mut *self.port(), CASH_BOOKS_KEY, book, "cash book")
    }

    /// Deletes a cash book together with every transaction and debt that
    /// references it. Dependents are removed before the parent, so an
    /// interrupted cascade can never leave orphans behind.
    pub fn delete_cash_book(&self, id: &str) -> Result<(), StoreError> {
        let mut port = self.port();
        delete_owned_by(&mut *port, TRANSACTIONS_KEY, id, |txn: &Transaction| {
            txn.cash_book_id() != id
        })?;
        delete_owned_by(&mut *port, DEBTS_KEY, id, |debt: &Debt| {
            debt.cash_book_id() != id
        })?;
        delete_record::<S, CashBook>(&mut *port, CASH_BOOKS_KEY, id, "cash book")
    }

    /// Lists transactions, optionally restricted to one cash book.
    pub fn list_transactions(
        &self,
        cash_book_id: Option<&str>,
    ) -> Result<Vec<Transaction>, StoreError> {
        let list: Vec<Transaction> = read_collection(&mut *self.port(), TRANSACTIONS_KEY)?;
        Ok(filter_owned(list, cash_book_id))
    }

    pub fn create_transaction(&self, transaction: Transaction) -> Result<(), StoreError> {
        transaction.validate()?;
        let mut port = self.port();
        ensure_cash_book_exists(&mut *port, transaction.cash_book_id())?;
        create_record(&mut *port, TRANSACTIONS_KEY, transaction, "transaction")
    }

    pub fn update_transaction(&self, transaction: Transaction) -> Result<(), StoreError> {
        transaction.validate()?;
        update_record(&mut *self.port(), TRANSACTIONS_KEY, transaction, "transaction")
    }

    pub fn delete_transaction(&self, id: &str) -> Result<(), StoreError> {
        delete_record::<S, Transaction>(&mut *self.port(), TRANSACTIONS_KEY, id, "transaction")
    }

    /// Lists debts, optionally restricted to one cash book.
    pub fn list_debts(&self, cash_book_id: Option<&str>) -> Result<Vec<Debt>, StoreError> {
        let list: Vec<Debt> = read_collection(&mut *self.port(), DEBTS_KEY)?;
        Ok(filter_owned(list, cash_book_id))
    }

    pub fn create_debt(&self, debt: Debt) -> Result<(), StoreError> {
        debt.validate()?;
        let mut port = self.port();
        ensure_cash_book_exists(&mut *port, debt.cash_book_id())?;
        create_record(&mut *port, DEBTS_KEY, debt, "debt")
    }

    pub fn update_debt(&self, debt: Debt) -> Result<(), StoreError> {
        debt.validate()?;
        update_record(&mut *self.port(), DEBTS_KEY, debt, "debt")
    }

    pub fn delete_debt(&self, id: &str) -> Result<(), StoreError> {
        delete_record::<S, Debt>(&mut *self.port(), DEBTS_KEY, id, "debt")
    }

    /// Flips or sets the settlement status of one debt, leaving every other
    /// field untouched. No-op when the debt does not exist.
    pub fn set_debt_status(&self, id: &str, status: DebtStatus) -> Result<(), StoreError> {
        let mut port = self.port();
        let mut debts: Vec<Debt> = read_collection(&mut *port, DEBTS_KEY)?;
        match debts.iter_mut().find(|debt| debt.id == id) {
            Some(debt) => {
                debt.status = status;
                write_collection(&mut *port, DEBTS_KEY, &debts)
            }
            None => {
                tracing::debug!(id, "set_debt_status on missing debt is a no-op");
                Ok(())
            }
        }
    }

    /// Computes the summary tuple for one cash book; an unknown id yields
    /// the zero summary rather than an error.
    pub fn summarize(&self, cash_book_id: &str) -> Result<Summary, StoreError> {
        let mut port = self.port();
        let books: Vec<CashBook> = read_collection(&mut *port, CASH_BOOKS_KEY)?;
        let Some(book) = books.into_iter().find(|book| book.id == cash_book_id) else {
            return Ok(Summary::default());
        };
        let transactions: Vec<Transaction> = read_collection(&mut *port, TRANSACTIONS_KEY)?;
        let debts: Vec<Debt> = read_collection(&mut *port, DEBTS_KEY)?;
        Ok(Summary::compute(
            &book,
            &filter_owned(transactions, Some(cash_book_id)),
            &filter_owned(debts, Some(cash_book_id)),
        ))
    }

    fn port(&self) -> MutexGuard<'_, S> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the collection files themselves stay consistent, so keep going.
        self.port.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn read_collection<S: StoragePort, T: DeserializeOwned>(
    port: &mut S,
    key: &str,
) -> Result<Vec<T>, StoreError> {
    let Some(payload) = port.read(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&payload) {
        Ok(records) => Ok(records),
        Err(err) => {
            tracing::warn!(key, %err, "unparseable collection payload, treating as empty");
            Ok(Vec::new())
        }
    }
}

fn write_collection<S: StoragePort, T: Serialize>(
    port: &mut S,
    key: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let payload = serde_json::to_string(records)?;
    port.write(key, &payload)
}

fn create_record<S, T>(port: &mut S, key: &str, record: T, label: &str) -> Result<(), StoreError>
where
    S: StoragePort,
    T: Identifiable + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = read_collection(port, key)?;
    if records.iter().any(|existing| existing.id() == record.id()) {
        return Err(StoreError::Validation(format!(
            "{label} id `{}` already exists",
            record.id()
        )));
    }
    records.push(record);
    write_collection(port, key, &records)
}

fn update_record<S, T>(port: &mut S, key: &str, record: T, label: &str) -> Result<(), StoreError>
where
    S: StoragePort,
    T: Identifiable + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = read_collection(port, key)?;
    match records.iter_mut().find(|existing| existing.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            write_collection(port, key, &records)
        }
        None => {
            tracing::debug!(id = record.id(), "update on missing {label} is a no-op");
            Ok(())
        }
    }
}

fn delete_record<S, T>(port: &mut S, key: &str, id: &str, label: &str) -> Result<(), StoreError>
where
    S: StoragePort,
    T: Identifiable + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = read_collection(port, key)?;
    let before = records.len();
    records.retain(|existing| existing.id() != id);
    if records.len() == before {
        tracing::debug!(id, "delete on missing {label} is a no-op");
        return Ok(());
    }
    write_collection(port, key, &records)
}

fn delete_owned_by<S, T, F>(
    port: &mut S,
    key: &str,
    owner_id: &str,
    keep: F,
) -> Result<(), StoreError>
where
    S: StoragePort,
    T: Serialize + DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let mut records: Vec<T> = read_collection(port, key)?;
    let before = records.len();
    records.retain(keep);
    if records.len() != before {
        tracing::debug!(
            key,
            owner_id,
            removed = before - records.len(),
            "cascade delete removed dependents"
        );
    }
    write_collection(port, key, &records)
}

fn ensure_cash_book_exists<S: StoragePort>(port: &mut S, id: &str) -> Result<(), StoreError> {
    let books: Vec<CashBook> = read_collection(port, CASH_BOOKS_KEY)?;
    if books.iter().any(|book| book.id == id) {
        Ok(())
    } else {
        Err(StoreError::InvalidRef(format!(
            "cash book `{id}` does not exist"
        )))
    }
}

fn filter_owned<T: OwnedByCashBook>(records: Vec<T>, cash_book_id: Option<&str>) -> Vec<T> {
    match cash_book_id {
        Some(owner) => records
            .into_iter()
            .filter(|record| record.cash_book_id() == owner)
            .collect(),
        None => records,
    }
}
