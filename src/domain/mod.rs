//! Pure domain models for cash books, transactions, and debts.
//! No I/O, no CLI, no storage. Only data types and validation.

pub mod cash_book;
pub mod category;
pub mod common;
pub mod debt;
pub mod transaction;

pub use cash_book::CashBook;
pub use category::{Category, ExpenseCategory, IncomeCategory};
pub use common::{Identifiable, OwnedByCashBook};
pub use debt::{Debt, DebtStatus};
pub use transaction::{Transaction, TransactionKind};

/// Maximum length for names (cash book name, debt counterparty).
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length for free-text fields (description, transaction note).
pub const TEXT_MAX_LEN: usize = 500;
