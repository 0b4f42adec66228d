//! Chart-ready aggregation of a transaction set: time buckets, expense
//! categories, and recent activity.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ExpenseCategory, Transaction, TransactionKind},
    utils,
};

/// Time granularity for the income-vs-expense report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "daily" => Some(ReportPeriod::Daily),
            "monthly" => Some(ReportPeriod::Monthly),
            "yearly" => Some(ReportPeriod::Yearly),
            _ => None,
        }
    }
}

/// One `(bucket label, income, expense)` row of the period report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRow {
    pub label: String,
    pub income: i64,
    pub expense: i64,
}

/// One `(category, total)` row of the expense breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: ExpenseCategory,
    pub total: i64,
}

/// Buckets the whole supplied transaction list by the period derived from
/// each transaction's date, accumulating income and expense per bucket.
///
/// Rows come out in first-occurrence order; callers wanting chronological
/// order sort explicitly. No date windowing is applied here, the caller
/// restricts the input if it wants one.
pub fn bucket_by_period(transactions: &[Transaction], period: ReportPeriod) -> Vec<PeriodRow> {
    let mut rows: Vec<PeriodRow> = Vec::new();
    for txn in transactions {
        let label = match period {
            ReportPeriod::Daily => utils::format_date(txn.date),
            ReportPeriod::Monthly => utils::format_month(txn.date),
            ReportPeriod::Yearly => utils::format_year(txn.date),
        };
        let index = match rows.iter().position(|row| row.label == label) {
            Some(index) => index,
            None => {
                rows.push(PeriodRow {
                    label,
                    income: 0,
                    expense: 0,
                });
                rows.len() - 1
            }
        };
        match txn.kind() {
            TransactionKind::Income => rows[index].income += txn.amount,
            TransactionKind::Expense => rows[index].expense += txn.amount,
        }
    }
    rows
}

/// Groups expense transactions by category, summing amounts, largest first.
/// Ties keep first-occurrence order (the sort is stable), so output is
/// deterministic for a fixed input.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = Vec::new();
    for txn in transactions {
        let crate::domain::Category::Expense(category) = txn.category else {
            continue;
        };
        match rows.iter_mut().find(|row| row.category == category) {
            Some(row) => row.total += txn.amount,
            None => rows.push(CategoryRow {
                category,
                total: txn.amount,
            }),
        }
    }
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Returns up to `limit` transactions ordered by date, newest first.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut list = transactions.to_vec();
    list.sort_by(|a, b| b.date.cmp(&a.date));
    list.truncate(limit);
    list
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Category, IncomeCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(date: NaiveDate, amount: i64) -> Transaction {
        Transaction::new("bk1", date, amount, Category::Income(IncomeCategory::Sales), "")
    }

    fn expense(date: NaiveDate, amount: i64, category: ExpenseCategory) -> Transaction {
        Transaction::new("bk1", date, amount, Category::Expense(category), "")
    }

    #[test]
    fn monthly_buckets_accumulate_both_sides() {
        let txns = vec![
            income(date(2026, 1, 5), 100_000),
            expense(date(2026, 1, 20), 40_000, ExpenseCategory::Bills),
            income(date(2026, 2, 1), 50_000),
        ];
        let rows = bucket_by_period(&txns, ReportPeriod::Monthly);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "January 2026");
        assert_eq!(rows[0].income, 100_000);
        assert_eq!(rows[0].expense, 40_000);
        assert_eq!(rows[1].label, "February 2026");
        assert_eq!(rows[1].income, 50_000);
    }

    #[test]
    fn daily_buckets_split_by_day_yearly_by_year() {
        let txns = vec![
            income(date(2026, 1, 5), 10),
            income(date(2026, 1, 6), 20),
            income(date(2027, 3, 1), 30),
        ];
        assert_eq!(bucket_by_period(&txns, ReportPeriod::Daily).len(), 3);
        let yearly = bucket_by_period(&txns, ReportPeriod::Yearly);
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].label, "2026");
        assert_eq!(yearly[0].income, 30);
    }

    #[test]
    fn buckets_keep_first_occurrence_order() {
        let txns = vec![
            income(date(2026, 2, 1), 1),
            income(date(2026, 1, 1), 2),
            income(date(2026, 2, 15), 3),
        ];
        let rows = bucket_by_period(&txns, ReportPeriod::Monthly);
        assert_eq!(rows[0].label, "February 2026");
        assert_eq!(rows[1].label, "January 2026");
    }

    #[test]
    fn category_rows_sort_descending_and_partition_expenses() {
        let txns = vec![
            expense(date(2026, 1, 1), 50_000, ExpenseCategory::Transportation),
            expense(date(2026, 1, 2), 200_000, ExpenseCategory::FoodAndDrink),
            expense(date(2026, 1, 3), 30_000, ExpenseCategory::Transportation),
            income(date(2026, 1, 4), 999_999),
        ];
        let rows = expense_by_category(&txns);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, ExpenseCategory::FoodAndDrink);
        assert_eq!(rows[0].total, 200_000);
        assert_eq!(rows[1].total, 80_000);

        let bucketed: i64 = rows.iter().map(|row| row.total).sum();
        let total_expense: i64 = txns
            .iter()
            .filter(|txn| txn.kind() == TransactionKind::Expense)
            .map(|txn| txn.amount)
            .sum();
        assert_eq!(bucketed, total_expense);
    }

    #[test]
    fn recent_orders_newest_first_and_truncates() {
        let txns = vec![
            income(date(2026, 1, 1), 1),
            income(date(2026, 3, 1), 2),
            income(date(2026, 2, 1), 3),
        ];
        let top = recent(&txns, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].date, date(2026, 3, 1));
        assert_eq!(top[1].date, date(2026, 2, 1));
    }
}
