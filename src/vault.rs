use crate::Budgets;
use crate::Config;
use crate::Keyvalue;
use crate::Transactionlist;

/// Loads and saves the store's collections through a [`Keyvalue`] backend.
/// Reads always produce a usable value: a missing or unreadable document
/// falls back instead of failing.
pub struct Vault<K> {
    kv: K,
    transactions_key: String,
    budgets_key: String,
}

enum Reading<T> {
    Found(T),
    Absent,
    Corrupt,
}

impl<K> Vault<K>
where
    K: Keyvalue,
{
    pub fn new(kv: K, config: &Config) -> Self {
        Self {
            kv,
            transactions_key: config.transactions_key.clone(),
            budgets_key: config.budgets_key.clone(),
        }
    }

    /// Returns the backend.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Transactions fall back to an empty list whether the document is
    /// missing or unreadable.
    pub fn load_transactions(&self) -> Transactionlist {
        match self.read(&self.transactions_key) {
            Reading::Found(transactions) => transactions,
            Reading::Absent | Reading::Corrupt => Transactionlist::new(),
        }
    }

    /// Budgets seed the default limits when no document exists yet. An
    /// unreadable document comes back empty, not re-seeded, so the limits a
    /// user may have edited are never silently restored.
    pub fn load_budgets(&self) -> Budgets {
        match self.read(&self.budgets_key) {
            Reading::Found(budgets) => budgets,
            Reading::Absent => Budgets::seed(),
            Reading::Corrupt => Budgets::new(),
        }
    }

    pub fn save_transactions(&mut self, transactions: &Transactionlist) -> std::io::Result<()> {
        self.kv
            .set(&self.transactions_key, &transactions.to_string())
    }

    pub fn save_budgets(&mut self, budgets: &Budgets) -> std::io::Result<()> {
        self.kv.set(&self.budgets_key, &budgets.to_string())
    }

    fn read<T>(&self, key: &str) -> Reading<T>
    where
        T: std::str::FromStr,
        <T as std::str::FromStr>::Err: std::fmt::Display,
    {
        match self.kv.get(key) {
            Ok(Some(s)) => match s.parse() {
                Ok(value) => Reading::Found(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored document is unreadable");
                    Reading::Corrupt
                }
            },
            Ok(None) => {
                tracing::debug!(key, "no stored document");
                Reading::Absent
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "reading stored document failed");
                Reading::Corrupt
            }
        }
    }
}
