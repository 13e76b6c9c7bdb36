use crate::Category;
use crate::Date;
use crate::Kobo;

/// Whether a transaction adds to or draws from the balance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single recorded money movement. The amount is always positive and the
/// category always fits the kind: income pairs with the income category,
/// expenses with the five expense categories.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Unchecked")]
pub struct Transaction {
    id: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Kobo,
    category: Category,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    note: String,
    date: Date,
}

impl Transaction {
    pub fn new(
        id: String,
        kind: TransactionKind,
        amount: Kobo,
        category: Category,
        note: String,
        date: Date,
    ) -> Result<Self, ValidationError> {
        ValidationError::check(kind, amount, category)?;
        Ok(Self {
            id,
            kind,
            amount,
            category,
            note,
            date,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Kobo {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns a copy with the patch's fields replaced. The id never changes.
    /// Replacing the category re-derives the kind, so the result upholds the
    /// kind/category pairing.
    pub fn patched(&self, patch: &Patch) -> Self {
        let category = patch.category.unwrap_or(self.category);
        Self {
            id: self.id.clone(),
            kind: category.kind(),
            amount: patch.amount.unwrap_or(self.amount),
            category,
            note: patch.note.clone().unwrap_or_else(|| self.note.clone()),
            date: patch.date.unwrap_or(self.date),
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Fields of a transaction before the store assigns an id. Constructing a
/// draft validates the amount and the kind/category pairing, so a draft
/// always holds storable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    kind: TransactionKind,
    amount: Kobo,
    category: Category,
    note: String,
    date: Date,
}

impl Draft {
    /// An income entry. The category is always the income category.
    pub fn income(amount: Kobo, note: String, date: Date) -> Result<Self, ValidationError> {
        ValidationError::check(TransactionKind::Income, amount, Category::Income)?;
        Ok(Self {
            kind: TransactionKind::Income,
            amount,
            category: Category::Income,
            note,
            date,
        })
    }

    /// An expense entry against one of the five expense categories.
    pub fn expense(
        category: Category,
        amount: Kobo,
        note: String,
        date: Date,
    ) -> Result<Self, ValidationError> {
        ValidationError::check(TransactionKind::Expense, amount, category)?;
        Ok(Self {
            kind: TransactionKind::Expense,
            amount,
            category,
            note,
            date,
        })
    }

    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            note: self.note,
            date: self.date,
        }
    }
}

/// Partial replacement of a transaction's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    amount: Option<Kobo>,
    category: Option<Category>,
    note: Option<String>,
    date: Option<Date>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the amount. Fails on a non-positive amount.
    pub fn amount(self, amount: Kobo) -> Result<Self, ValidationError> {
        if amount <= Kobo(0) {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self {
            amount: Some(amount),
            ..self
        })
    }

    pub fn category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    pub fn note(self, note: String) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }

    pub fn date(self, date: Date) -> Self {
        Self {
            date: Some(date),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("category '{category}' does not fit an {kind} entry")]
    CategoryMismatch {
        kind: TransactionKind,
        category: Category,
    },
}

impl ValidationError {
    fn check(kind: TransactionKind, amount: Kobo, category: Category) -> Result<(), Self> {
        if amount <= Kobo(0) {
            return Err(Self::NonPositiveAmount);
        }
        if category.kind() != kind {
            return Err(Self::CategoryMismatch { kind, category });
        }
        Ok(())
    }
}

#[derive(serde::Deserialize)]
struct Unchecked {
    id: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Kobo,
    category: Category,
    #[serde(default)]
    note: String,
    date: Date,
}

impl TryFrom<Unchecked> for Transaction {
    type Error = ValidationError;

    fn try_from(u: Unchecked) -> Result<Self, Self::Error> {
        Self::new(u.id, u.kind, u.amount, u.category, u.note, u.date)
    }
}
