use std::collections::BTreeMap;

use crate::Category;
use crate::Kobo;

/// Monthly spending ceilings, one per expense category. The category is the
/// natural key, so at most one limit per category can exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BTreeMap<Category, Kobo>")]
pub struct Budgets(BTreeMap<Category, Kobo>);

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default limits seeded when no budgets are stored yet: 1500 naira for
    /// housing, 500 for food, 300 for every other expense category.
    pub fn seed() -> Self {
        let mut m = BTreeMap::new();
        for category in Category::EXPENSES {
            let limit = match category {
                Category::Housing => Kobo::from_naira(1500),
                Category::Food => Kobo::from_naira(500),
                _ => Kobo::from_naira(300),
            };
            m.insert(category, limit);
        }
        Self(m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Upserts the limit for a category. The caller is expected to have
    /// validated the pair with [`LimitError::check`].
    pub fn set(&mut self, category: Category, limit: Kobo) {
        self.0.insert(category, limit);
    }

    /// Returns the limit for a category, zero when unbudgeted.
    pub fn get(&self, category: Category) -> Kobo {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Kobo)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("the income category cannot carry a budget")]
    IncomeCategory,
    #[error("limit must not be negative")]
    Negative,
}

impl LimitError {
    /// Boundary check for a user-supplied budget entry.
    pub fn check(category: Category, limit: Kobo) -> Result<(), Self> {
        if !category.is_expense() {
            return Err(Self::IncomeCategory);
        }
        if limit.is_negative() {
            return Err(Self::Negative);
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<Category, Kobo>> for Budgets {
    type Error = LimitError;

    fn try_from(m: BTreeMap<Category, Kobo>) -> Result<Self, Self::Error> {
        for (&category, &limit) in &m {
            LimitError::check(category, limit)?;
        }
        Ok(Self(m))
    }
}

impl std::fmt::Display for Budgets {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Budgets {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Budgets {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
