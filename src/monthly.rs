use std::collections::BTreeMap;

use strum::VariantArray;

use crate::Category;
use crate::Kobo;
use crate::Monthkey;
use crate::Transaction;
use crate::TransactionKind;

/// One month's totals: income, expenses, their balance, and the amount
/// recorded per category. Every category is present, zeroed when nothing
/// was recorded against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyData {
    income: Kobo,
    expenses: Kobo,
    balance: Kobo,
    by_category: BTreeMap<Category, Kobo>,
}

impl MonthlyData {
    /// Folds the transactions dated within `month` into totals. Income
    /// entries raise income and expense entries raise expenses. Either kind
    /// also counts towards its category.
    pub fn compute<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        month: Monthkey,
    ) -> Self {
        let mut data = Self::default();
        for transaction in transactions {
            if transaction.date().monthkey() != month {
                continue;
            }
            match transaction.kind() {
                TransactionKind::Income => data.income += transaction.amount(),
                TransactionKind::Expense => data.expenses += transaction.amount(),
            }
            *data.by_category.entry(transaction.category()).or_default() += transaction.amount();
        }
        data.balance = data.income - data.expenses;
        data
    }

    pub fn income(&self) -> Kobo {
        self.income
    }

    pub fn expenses(&self) -> Kobo {
        self.expenses
    }

    /// Income minus expenses. Negative when the month overspent.
    pub fn balance(&self) -> Kobo {
        self.balance
    }

    pub fn category(&self, category: Category) -> Kobo {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    pub fn by_category(&self) -> impl Iterator<Item = (Category, Kobo)> + '_ {
        self.by_category.iter().map(|(&k, &v)| (k, v))
    }
}

impl Default for MonthlyData {
    fn default() -> Self {
        Self {
            income: Kobo::default(),
            expenses: Kobo::default(),
            balance: Kobo::default(),
            by_category: Category::VARIANTS
                .iter()
                .map(|&category| (category, Kobo::default()))
                .collect(),
        }
    }
}
