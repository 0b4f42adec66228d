//! Thin terminal view layer over the ledger store.
//!
//! Consumes summary/report outputs and issues CRUD calls; every number shown
//! comes from the core unmodified.

pub mod output;

use chrono::{NaiveDate, Utc};
use dialoguer::Confirm;

use crate::{
    domain::{CashBook, Category, Debt, ExpenseCategory, IncomeCategory, Transaction, TransactionKind},
    errors::StoreError,
    report::{self, ReportPeriod},
    storage::{JsonFileStorage, StoragePort},
    store::LedgerStore,
};

const RECENT_LIMIT: usize = 10;

/// Entry point for the binary: dispatches `args` (without the program name)
/// against a store rooted in the default data directory.
pub fn run<I>(args: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = String>,
{
    let store = LedgerStore::new(JsonFileStorage::new_default()?);
    dispatch(&store, args.into_iter().collect())
}

fn dispatch<S: StoragePort>(store: &LedgerStore<S>, mut args: Vec<String>) -> Result<(), StoreError> {
    let yes = take_flag(&mut args, "--yes");
    let date = match take_value(&mut args, "--date") {
        Some(raw) => parse_date(&raw)?,
        None => Utc::now().date_naive(),
    };

    let command = args.first().cloned().unwrap_or_else(|| "help".into());
    let rest: &[String] = args.get(1..).unwrap_or(&[]);

    match command.as_str() {
        "books" => cmd_books(store),
        "create-book" => cmd_create_book(store, rest),
        "delete-book" => cmd_delete_book(store, rest, yes),
        "add" => cmd_add_transaction(store, rest, date),
        "transactions" => cmd_transactions(store, rest),
        "delete-transaction" => cmd_delete_transaction(store, rest, yes),
        "debts" => cmd_debts(store, rest),
        "add-debt" => cmd_add_debt(store, rest, date),
        "toggle-debt" => cmd_toggle_debt(store, rest),
        "delete-debt" => cmd_delete_debt(store, rest, yes),
        "summary" => cmd_summary(store, rest),
        "report" => cmd_report(store, rest),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        other => Err(StoreError::Validation(format!(
            "unknown command `{other}`, see `cashbook_cli help`"
        ))),
    }
}

fn cmd_books<S: StoragePort>(store: &LedgerStore<S>) -> Result<(), StoreError> {
    let books = store.list_cash_books()?;
    if books.is_empty() {
        output::info("no cash books yet, create one with `create-book <name>`");
        return Ok(());
    }
    output::section("Cash books");
    for book in &books {
        let summary = store.summarize(&book.id)?;
        output::cash_book_row(book, &summary);
    }
    Ok(())
}

fn cmd_create_book<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let name = required(rest, 0, "create-book <name> [description] [opening-balance]")?;
    let description = rest.get(1).cloned().unwrap_or_default();
    let opening_balance = match rest.get(2) {
        Some(raw) => parse_amount(raw)?,
        None => 0,
    };
    let book = CashBook::new(name, description, opening_balance);
    let id = book.id.clone();
    store.create_cash_book(book)?;
    output::success(format!("created cash book {id}"));
    Ok(())
}

fn cmd_delete_book<S: StoragePort>(
    store: &LedgerStore<S>,
    rest: &[String],
    yes: bool,
) -> Result<(), StoreError> {
    let book = resolve_book(store, required(rest, 0, "delete-book <book>")?)?;
    if !confirm(
        yes,
        &format!(
            "Delete `{}` and every transaction and debt in it?",
            book.name
        ),
    ) {
        output::info("aborted");
        return Ok(());
    }
    store.delete_cash_book(&book.id)?;
    output::success(format!("deleted cash book `{}`", book.name));
    Ok(())
}

fn cmd_add_transaction<S: StoragePort>(
    store: &LedgerStore<S>,
    rest: &[String],
    date: NaiveDate,
) -> Result<(), StoreError> {
    let usage = "add <book> income|expense <amount> <category> [note] [--date YYYY-MM-DD]";
    let book = resolve_book(store, required(rest, 0, usage)?)?;
    let kind = parse_kind(required(rest, 1, usage)?)?;
    let amount = parse_amount(required(rest, 2, usage)?)?;
    let category_label = required(rest, 3, usage)?;
    let note = rest.get(4).cloned().unwrap_or_default();

    let category = Category::parse(kind, category_label).ok_or_else(|| {
        StoreError::Validation(format!(
            "unknown category `{category_label}`; choose one of: {}",
            category_labels(kind)
        ))
    })?;

    let txn = Transaction::new(&book.id, date, amount, category, note);
    let id = txn.id.clone();
    store.create_transaction(txn)?;
    output::success(format!("recorded transaction {id}"));
    Ok(())
}

fn cmd_transactions<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let book = resolve_book(store, required(rest, 0, "transactions <book>")?)?;
    let transactions = store.list_transactions(Some(&book.id))?;
    if transactions.is_empty() {
        output::info("no transactions yet");
        return Ok(());
    }
    output::section(&format!("Transactions - {}", book.name));
    for txn in report::recent(&transactions, transactions.len()) {
        output::transaction_row(&txn);
    }
    Ok(())
}

fn cmd_delete_transaction<S: StoragePort>(
    store: &LedgerStore<S>,
    rest: &[String],
    yes: bool,
) -> Result<(), StoreError> {
    let id = required(rest, 0, "delete-transaction <id>")?;
    if !confirm(yes, "Delete this transaction?") {
        output::info("aborted");
        return Ok(());
    }
    store.delete_transaction(id)?;
    output::success(format!("deleted transaction {id}"));
    Ok(())
}

fn cmd_debts<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let book = resolve_book(store, required(rest, 0, "debts <book>")?)?;
    let debts = store.list_debts(Some(&book.id))?;
    if debts.is_empty() {
        output::info("no debts recorded");
        return Ok(());
    }
    output::section(&format!("Debts - {}", book.name));
    for debt in &debts {
        output::debt_row(debt);
    }
    Ok(())
}

fn cmd_add_debt<S: StoragePort>(
    store: &LedgerStore<S>,
    rest: &[String],
    date: NaiveDate,
) -> Result<(), StoreError> {
    let usage = "add-debt <book> <counterparty> <amount> [--date YYYY-MM-DD]";
    let book = resolve_book(store, required(rest, 0, usage)?)?;
    let counterparty = required(rest, 1, usage)?;
    let amount = parse_amount(required(rest, 2, usage)?)?;
    let debt = Debt::new(&book.id, counterparty, amount, date);
    let id = debt.id.clone();
    store.create_debt(debt)?;
    output::success(format!("recorded debt {id}"));
    Ok(())
}

fn cmd_toggle_debt<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let id = required(rest, 0, "toggle-debt <id>")?;
    let debts = store.list_debts(None)?;
    let debt = debts
        .iter()
        .find(|debt| debt.id == *id)
        .ok_or_else(|| StoreError::NotFound(format!("debt `{id}`")))?;
    let status = debt.status.toggled();
    store.set_debt_status(id, status)?;
    output::success(format!("debt {id} is now {status:?}"));
    Ok(())
}

fn cmd_delete_debt<S: StoragePort>(
    store: &LedgerStore<S>,
    rest: &[String],
    yes: bool,
) -> Result<(), StoreError> {
    let id = required(rest, 0, "delete-debt <id>")?;
    if !confirm(yes, "Delete this debt?") {
        output::info("aborted");
        return Ok(());
    }
    store.delete_debt(id)?;
    output::success(format!("deleted debt {id}"));
    Ok(())
}

fn cmd_summary<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let book = resolve_book(store, required(rest, 0, "summary <book>")?)?;
    let summary = store.summarize(&book.id)?;
    output::section(&book.name);
    output::summary_block(&summary);
    Ok(())
}

fn cmd_report<S: StoragePort>(store: &LedgerStore<S>, rest: &[String]) -> Result<(), StoreError> {
    let usage = "report <book> [daily|monthly|yearly]";
    let book = resolve_book(store, required(rest, 0, usage)?)?;
    let period = match rest.get(1) {
        Some(token) => ReportPeriod::parse(token)
            .ok_or_else(|| StoreError::Validation(format!("unknown period `{token}`; {usage}")))?,
        None => ReportPeriod::Monthly,
    };
    let transactions = store.list_transactions(Some(&book.id))?;
    if transactions.is_empty() {
        output::info("no transactions yet, nothing to report");
        return Ok(());
    }

    output::section(&format!("Income vs expense - {}", book.name));
    output::period_rows(&report::bucket_by_period(&transactions, period));

    let categories = report::expense_by_category(&transactions);
    if !categories.is_empty() {
        output::section("Expenses by category");
        output::category_rows(&categories);
    }

    output::section("Recent transactions");
    for txn in report::recent(&transactions, RECENT_LIMIT) {
        output::transaction_row(&txn);
    }
    Ok(())
}

/// Accepts either a cash book id or its exact name.
fn resolve_book<S: StoragePort>(
    store: &LedgerStore<S>,
    token: &str,
) -> Result<CashBook, StoreError> {
    let books = store.list_cash_books()?;
    books
        .into_iter()
        .find(|book| book.id == token || book.name == token)
        .ok_or_else(|| StoreError::NotFound(format!("cash book `{token}`")))
}

fn confirm(yes: bool, prompt: &str) -> bool {
    if yes {
        return true;
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn required<'a>(rest: &'a [String], index: usize, usage: &str) -> Result<&'a String, StoreError> {
    rest.get(index)
        .ok_or_else(|| StoreError::Validation(format!("usage: {usage}")))
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|arg| arg == flag) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    }
}

fn take_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let index = args.iter().position(|arg| arg == flag)?;
    if index + 1 >= args.len() {
        args.remove(index);
        return None;
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Some(value)
}

fn parse_kind(token: &str) -> Result<TransactionKind, StoreError> {
    match token {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(StoreError::Validation(format!(
            "expected `income` or `expense`, got `{other}`"
        ))),
    }
}

/// Parses an integer amount, tolerating `.` or `_` thousands separators.
fn parse_amount(raw: &str) -> Result<i64, StoreError> {
    let cleaned: String = raw.chars().filter(|c| *c != '.' && *c != '_').collect();
    cleaned
        .parse::<i64>()
        .map_err(|_| StoreError::Validation(format!("`{raw}` is not a valid amount")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| StoreError::Validation(format!("`{raw}` is not a valid date (YYYY-MM-DD)")))
}

fn category_labels(kind: TransactionKind) -> String {
    let labels: Vec<&str> = match kind {
        TransactionKind::Income => IncomeCategory::ALL.iter().map(|c| c.label()).collect(),
        TransactionKind::Expense => ExpenseCategory::ALL.iter().map(|c| c.label()).collect(),
    };
    labels.join(", ")
}

fn print_help() {
    println!("cashbook_cli - local cash book ledger");
    println!();
    println!("Commands:");
    println!("  books");
    println!("  create-book <name> [description] [opening-balance]");
    println!("  delete-book <book> [--yes]");
    println!("  add <book> income|expense <amount> <category> [note] [--date YYYY-MM-DD]");
    println!("  transactions <book>");
    println!("  delete-transaction <id> [--yes]");
    println!("  debts <book>");
    println!("  add-debt <book> <counterparty> <amount> [--date YYYY-MM-DD]");
    println!("  toggle-debt <id>");
    println!("  delete-debt <id> [--yes]");
    println!("  summary <book>");
    println!("  report <book> [daily|monthly|yearly]");
}
