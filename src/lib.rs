//! Core engine of a personal finance tracker: income and expense
//! transactions, monthly aggregation, per-category budgets and their
//! status, a persistent store, and plain-text reports.

pub mod breakdown;
pub mod budgets;
pub mod category;
pub mod charset;
pub mod config;
pub mod date;
pub mod keyvalue;
pub mod kobo;
pub mod locale;
pub mod monthkey;
pub mod monthly;
pub mod progress;
pub mod status;
pub mod store;
pub mod transaction;
pub mod transactionlist;
pub mod util;
pub mod vault;

pub use budgets::Budgets;
pub use budgets::LimitError;
pub use category::Category;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use keyvalue::Fs;
pub use keyvalue::Keyvalue;
pub use keyvalue::Memory;
pub use kobo::Kobo;
pub use locale::Locale;
pub use monthkey::Monthkey;
pub use monthly::MonthlyData;
pub use status::BudgetStatus;
pub use store::Event;
pub use store::Store;
pub use transaction::Draft;
pub use transaction::Patch;
pub use transaction::Transaction;
pub use transaction::TransactionKind;
pub use transaction::ValidationError;
pub use transactionlist::Transactionlist;
pub use vault::Vault;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber. Repeat calls have no effect.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::from_default_env()
            .add_directive("kudi=info".parse().expect("directive should parse"));

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
