//! Terminal output helpers for the cash book CLI.

use colored::Colorize;
use std::fmt;

use crate::{
    domain::{CashBook, Debt, DebtStatus, Transaction, TransactionKind},
    report::{CategoryRow, PeriodRow},
    summary::Summary,
    utils,
};

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

pub fn cash_book_row(book: &CashBook, summary: &Summary) {
    println!(
        "{}  {}  {}",
        book.id.dimmed(),
        book.name.bold(),
        utils::format_currency(summary.balance).green()
    );
    if !book.description.is_empty() {
        println!("    {}", book.description.dimmed());
    }
}

pub fn summary_block(summary: &Summary) {
    println!("Balance       {}", utils::format_currency(summary.balance).bold());
    println!(
        "Income        {}",
        utils::format_currency(summary.total_income).green()
    );
    println!(
        "Expense       {}",
        utils::format_currency(summary.total_expense).red()
    );
    println!(
        "Unpaid debt   {}",
        utils::format_currency(summary.total_unpaid_debt).yellow()
    );
}

pub fn transaction_row(txn: &Transaction) {
    let (sign, amount) = match txn.kind() {
        TransactionKind::Income => ("+", utils::format_currency(txn.amount).green()),
        TransactionKind::Expense => ("-", utils::format_currency(txn.amount).red()),
    };
    let note = if txn.note.is_empty() { "-" } else { txn.note.as_str() };
    println!(
        "{}  {}  {:<16} {}{}  {}",
        txn.id.dimmed(),
        utils::format_date(txn.date),
        txn.category.label(),
        sign,
        amount,
        note.dimmed()
    );
}

pub fn debt_row(debt: &Debt) {
    let status = match debt.status {
        DebtStatus::Unpaid => "unpaid".yellow(),
        DebtStatus::Paid => "paid".green(),
    };
    println!(
        "{}  {}  {:<24} {}  {}",
        debt.id.dimmed(),
        utils::format_date(debt.date),
        debt.counterparty_name,
        utils::format_currency(debt.amount),
        status
    );
}

pub fn period_rows(rows: &[PeriodRow]) {
    for row in rows {
        println!(
            "{:<16} {:>16} {:>16}",
            row.label,
            utils::format_currency(row.income).green(),
            utils::format_currency(row.expense).red()
        );
    }
}

pub fn category_rows(rows: &[CategoryRow]) {
    for row in rows {
        println!(
            "{:<16} {:>16}",
            row.category.label(),
            utils::format_currency(row.total).red()
        );
    }
}
