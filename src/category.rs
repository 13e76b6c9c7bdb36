use crate::TransactionKind;

/// Classification tag for transactions: five expense categories plus income.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Category {
    Housing,
    Food,
    Transport,
    Utilities,
    Lifestyle,
    Income,
}

impl Category {
    /// The five budgetable expense categories, in display order.
    pub const EXPENSES: [Self; 5] = [
        Self::Housing,
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Lifestyle,
    ];

    pub const fn is_expense(self) -> bool {
        !matches!(self, Self::Income)
    }

    /// The transaction kind this category is valid for.
    pub const fn kind(self) -> TransactionKind {
        match self {
            Self::Income => TransactionKind::Income,
            _ => TransactionKind::Expense,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing (Rent, NEPA)",
            Self::Food => "Food & Groceries",
            Self::Transport => "Transport (Fuel, Public)",
            Self::Utilities => "Utilities & Internet",
            Self::Lifestyle => "Personal / Misc",
            Self::Income => "Income",
        }
    }

    /// Icon identifier for presentation layers.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Housing => "Home",
            Self::Food => "Utensils",
            Self::Transport => "Car",
            Self::Utilities => "Zap",
            Self::Lifestyle => "Sparkles",
            Self::Income => "Wallet",
        }
    }
}
