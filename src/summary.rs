//! Derived balance and totals for a single cash book.

use crate::domain::{CashBook, Debt, DebtStatus, Transaction, TransactionKind};

/// The derived `{balance, income, expense, unpaid debt}` tuple.
///
/// Debts deliberately do not move the balance in either direction; they are
/// tracked, not booked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub balance: i64,
    pub total_income: i64,
    pub total_expense: i64,
    pub total_unpaid_debt: i64,
}

impl Summary {
    /// Recomputes the summary from the current collection state. `transactions`
    /// and `debts` are expected to be pre-filtered to this cash book.
    pub fn compute(book: &CashBook, transactions: &[Transaction], debts: &[Debt]) -> Self {
        let total_income = transactions
            .iter()
            .filter(|txn| txn.kind() == TransactionKind::Income)
            .map(|txn| txn.amount)
            .sum();
        let total_expense = transactions
            .iter()
            .filter(|txn| txn.kind() == TransactionKind::Expense)
            .map(|txn| txn.amount)
            .sum();
        let total_unpaid_debt = debts
            .iter()
            .filter(|debt| debt.status == DebtStatus::Unpaid)
            .map(|debt| debt.amount)
            .sum();
        Self {
            balance: book.opening_balance + total_income - total_expense,
            total_income,
            total_expense,
            total_unpaid_debt,
        }
    }
}
