//! Closed category vocabularies for income and expense transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionKind;

/// Categories available for income transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    Salary,
    Bonus,
    Sales,
    Investment,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 6] = [
        IncomeCategory::Salary,
        IncomeCategory::Bonus,
        IncomeCategory::Sales,
        IncomeCategory::Investment,
        IncomeCategory::Gift,
        IncomeCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Bonus => "Bonus",
            IncomeCategory::Sales => "Sales",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Gift => "Gift",
            IncomeCategory::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Categories available for expense transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Transportation,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::FoodAndDrink,
        ExpenseCategory::Transportation,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndDrink => "Food & Drink",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// A category paired with its transaction kind.
///
/// Both vocabularies contain an `Other` entry, so the bare label is only
/// meaningful next to the record's kind; carrying the kind in the type keeps a
/// transaction from referencing a category of the wrong vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn kind(self) -> TransactionKind {
        match self {
            Category::Income(_) => TransactionKind::Income,
            Category::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Income(c) => c.label(),
            Category::Expense(c) => c.label(),
        }
    }

    /// Resolves a stored label against the vocabulary of `kind`.
    pub fn parse(kind: TransactionKind, label: &str) -> Option<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::parse(label).map(Category::Income),
            TransactionKind::Expense => ExpenseCategory::parse(label).map(Category::Expense),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parse() {
        for category in IncomeCategory::ALL {
            assert_eq!(IncomeCategory::parse(category.label()), Some(category));
        }
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn other_resolves_by_kind() {
        assert_eq!(
            Category::parse(TransactionKind::Income, "Other"),
            Some(Category::Income(IncomeCategory::Other))
        );
        assert_eq!(
            Category::parse(TransactionKind::Expense, "Other"),
            Some(Category::Expense(ExpenseCategory::Other))
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(Category::parse(TransactionKind::Income, "Groceries"), None);
    }
}
