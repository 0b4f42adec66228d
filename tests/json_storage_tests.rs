use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;

use cashbook_core::{
    domain::{CashBook, Category, Debt, IncomeCategory, Transaction},
    storage::JsonFileStorage,
    store::{LedgerStore, CASH_BOOKS_KEY, DEBTS_KEY, TRANSACTIONS_KEY},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn collections_survive_a_store_reopen() {
    let dir = tempdir().expect("tempdir");
    let book = CashBook::new("Durable", "survives restarts", 10_000);
    let txn = Transaction::new(
        &book.id,
        date(2026, 8, 1),
        5_000,
        Category::Income(IncomeCategory::Sales),
        "morning sales",
    );
    let debt = Debt::new(&book.id, "Pak Budi", 2_500, date(2026, 8, 2));

    {
        let storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        let store = LedgerStore::new(storage);
        store.create_cash_book(book.clone()).unwrap();
        store.create_transaction(txn.clone()).unwrap();
        store.create_debt(debt.clone()).unwrap();
    }

    let storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
    let store = LedgerStore::new(storage);
    assert_eq!(store.get_cash_book(&book.id).unwrap(), Some(book.clone()));
    assert_eq!(store.list_transactions(Some(&book.id)).unwrap(), vec![txn]);
    assert_eq!(store.list_debts(Some(&book.id)).unwrap(), vec![debt]);
}

#[test]
fn cascade_delete_is_durable() {
    let dir = tempdir().expect("tempdir");
    let book = CashBook::new("Doomed", "", 0);

    {
        let store = LedgerStore::new(JsonFileStorage::new(dir.path().to_path_buf()).unwrap());
        store.create_cash_book(book.clone()).unwrap();
        store
            .create_transaction(Transaction::new(
                &book.id,
                date(2026, 8, 1),
                1_000,
                Category::Income(IncomeCategory::Gift),
                "",
            ))
            .unwrap();
        store
            .create_debt(Debt::new(&book.id, "X", 1_000, date(2026, 8, 1)))
            .unwrap();
        store.delete_cash_book(&book.id).unwrap();
    }

    let store = LedgerStore::new(JsonFileStorage::new(dir.path().to_path_buf()).unwrap());
    assert!(store.get_cash_book(&book.id).unwrap().is_none());
    assert!(store.list_transactions(None).unwrap().is_empty());
    assert!(store.list_debts(None).unwrap().is_empty());
}

#[test]
fn corrupted_files_degrade_to_empty_collections() {
    let dir = tempdir().expect("tempdir");
    for key in [CASH_BOOKS_KEY, TRANSACTIONS_KEY, DEBTS_KEY] {
        fs::write(dir.path().join(format!("{key}.json")), "corrupt!{").unwrap();
    }

    let store = LedgerStore::new(JsonFileStorage::new(dir.path().to_path_buf()).unwrap());
    assert!(store.list_cash_books().unwrap().is_empty());
    assert!(store.list_transactions(None).unwrap().is_empty());
    assert!(store.list_debts(None).unwrap().is_empty());
}

#[test]
fn collection_files_use_the_original_layout() {
    let dir = tempdir().expect("tempdir");
    let store = LedgerStore::new(JsonFileStorage::new(dir.path().to_path_buf()).unwrap());
    let book = CashBook::new("Layout", "wire check", 123);
    store.create_cash_book(book.clone()).unwrap();

    let payload = fs::read_to_string(dir.path().join(format!("{CASH_BOOKS_KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value[0]["id"], book.id.as_str());
    assert_eq!(value[0]["nama"], "Layout");
    assert_eq!(value[0]["deskripsi"], "wire check");
    assert_eq!(value[0]["saldoAwal"], 123);
}
