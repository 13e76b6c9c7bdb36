use crate::Budgets;
use crate::Category;
use crate::Draft;
use crate::Keyvalue;
use crate::Kobo;
use crate::MonthlyData;
use crate::Monthkey;
use crate::Patch;
use crate::Transaction;
use crate::Transactionlist;
use crate::Vault;

/// What changed inside a [`Store`]. Handed to subscribers after every
/// mutation and its write-through attempt.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Transactions,
    Budgets,
    SaveFailed(&'a std::io::Error),
}

type Subscriber = Box<dyn FnMut(Event<'_>)>;
type IdSource = Box<dyn FnMut() -> String>;

/// The single place application state lives. Mutations go through here so
/// every change is applied in memory, written through the vault, and
/// announced to subscribers in one motion.
///
/// A store is not synchronized and belongs to one thread.
pub struct Store<K> {
    vault: Vault<K>,
    transactions: Transactionlist,
    budgets: Budgets,
    loaded: bool,
    subscribers: Vec<Subscriber>,
    next_id: IdSource,
}

impl<K> Store<K>
where
    K: Keyvalue,
{
    pub fn new(vault: Vault<K>) -> Self {
        Self {
            vault,
            transactions: Transactionlist::new(),
            budgets: Budgets::new(),
            loaded: false,
            subscribers: Vec::new(),
            next_id: Box::new(|| uuid::Uuid::new_v4().to_string()),
        }
    }

    /// Replaces the generator for new transaction ids.
    pub fn with_id_source(self, next_id: impl FnMut() -> String + 'static) -> Self {
        Self {
            next_id: Box::new(next_id),
            ..self
        }
    }

    /// Registers a change listener. Subscribers run synchronously, in
    /// registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Event<'_>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Loads both collections from the vault and opens the store for
    /// write-through. Until this runs, mutations change memory only.
    pub fn initialize(&mut self) {
        self.transactions = self.vault.load_transactions();
        self.budgets = self.vault.load_budgets();
        self.loaded = true;
        tracing::info!(
            transactions = self.transactions.len(),
            budgets = self.budgets.len(),
            "store initialized"
        );
        self.emit(Event::Transactions);
        self.emit(Event::Budgets);
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn transactions(&self) -> &Transactionlist {
        &self.transactions
    }

    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    /// Aggregates the month's totals from the current transactions.
    pub fn monthly(&self, month: Monthkey) -> MonthlyData {
        MonthlyData::compute(&self.transactions, month)
    }

    /// Assigns an id to the draft and puts it at the front of the list, so
    /// the newest entry always comes first.
    pub fn add_transaction(&mut self, draft: Draft) -> Transaction {
        let id = (self.next_id)();
        let transaction = draft.into_transaction(id);
        self.transactions.prepend(transaction.clone());
        self.persist_transactions();
        self.emit(Event::Transactions);
        transaction
    }

    /// Removes and returns the transaction with `id`, `None` for an unknown
    /// id. The list is written through either way.
    pub fn delete_transaction(&mut self, id: &str) -> Option<Transaction> {
        let removed = self.transactions.remove(id);
        self.persist_transactions();
        self.emit(Event::Transactions);
        removed
    }

    /// Merges the patch into the transaction with `id` and returns the
    /// result, `None` for an unknown id. The list is written through either
    /// way.
    pub fn update_transaction(&mut self, id: &str, patch: &Patch) -> Option<Transaction> {
        let updated = self.transactions.update(id, patch);
        self.persist_transactions();
        self.emit(Event::Transactions);
        updated
    }

    /// Upserts the limit for a category. The caller is expected to have
    /// validated the pair with [`crate::LimitError::check`].
    pub fn update_budget(&mut self, category: Category, limit: Kobo) {
        self.budgets.set(category, limit);
        self.persist_budgets();
        self.emit(Event::Budgets);
    }

    fn persist_transactions(&mut self) {
        if !self.loaded {
            tracing::debug!("store not initialized, skipping save");
            return;
        }
        if let Err(e) = self.vault.save_transactions(&self.transactions) {
            tracing::warn!(error = %e, "saving transactions failed");
            self.emit(Event::SaveFailed(&e));
        }
    }

    fn persist_budgets(&mut self) {
        if !self.loaded {
            tracing::debug!("store not initialized, skipping save");
            return;
        }
        if let Err(e) = self.vault.save_budgets(&self.budgets) {
            tracing::warn!(error = %e, "saving budgets failed");
            self.emit(Event::SaveFailed(&e));
        }
    }

    fn emit(&mut self, event: Event<'_>) {
        for subscriber in &mut self.subscribers {
            subscriber(event)
        }
    }
}
