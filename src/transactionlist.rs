use crate::Monthkey;
use crate::Patch;
use crate::Transaction;

/// Recency-ordered collection of transactions: the most recently added entry
/// is always first.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transactionlist(Vec<Transaction>);

impl Transactionlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.0.iter().find(|tx| tx.id() == id)
    }

    /// Inserts at the front, keeping the most recent entry first.
    pub fn prepend(&mut self, tx: Transaction) {
        self.0.insert(0, tx);
    }

    /// Removes the transaction with the given id, returning it. `None` when
    /// no transaction has that id.
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let i = self.0.iter().position(|tx| tx.id() == id)?;
        Some(self.0.remove(i))
    }

    /// Applies a patch to the transaction with the given id, returning the
    /// updated value. `None` when no transaction has that id.
    pub fn update(&mut self, id: &str, patch: &Patch) -> Option<Transaction> {
        let i = self.0.iter().position(|tx| tx.id() == id)?;
        self.0[i] = self.0[i].patched(patch);
        Some(self.0[i].clone())
    }

    /// Iterates the transactions whose dates fall in the given month, in
    /// collection order.
    pub fn for_month(&self, month: Monthkey) -> impl Iterator<Item = &Transaction> {
        self.0.iter().filter(move |tx| tx.date().monthkey() == month)
    }
}

impl<'a> IntoIterator for &'a Transactionlist {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Transaction> for Transactionlist {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Transactionlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Transactionlist {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Transactionlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;
    use crate::Category;
    use crate::Draft;
    use crate::Kobo;

    fn tx(id: &str, category: Category, amount: i64, date: &str) -> Transaction {
        let draft = match category {
            Category::Income => {
                Draft::income(Kobo(amount), String::new(), date.parse().unwrap())
            }
            _ => Draft::expense(category, Kobo(amount), String::new(), date.parse().unwrap()),
        };
        draft.unwrap().into_transaction(id.into())
    }

    #[rstest]
    #[case(indoc!("[]\n"), Transactionlist::new())]
    #[case(
        indoc!(r#"
        [
          {
            "id": "t2",
            "type": "expense",
            "amount": 30000,
            "category": "food",
            "date": "2024-03-15"
          },
          {
            "id": "t1",
            "type": "income",
            "amount": 100000,
            "category": "income",
            "date": "2024-03-01"
          }
        ]
        "#),
        [
            tx("t2", Category::Food, 30000, "2024-03-15"),
            tx("t1", Category::Income, 100000, "2024-03-01"),
        ]
        .into_iter()
        .collect(),
    )]
    fn test_serde(#[case] s: &str, #[case] want: Transactionlist) {
        let got = s.parse::<Transactionlist>().unwrap();
        assert_eq!(got, want);
        assert_eq!(got.to_string(), s);
    }

    #[rstest]
    #[case(r#"[{"id":"x","type":"expense","amount":0,"category":"food","date":"2024-03-01"}]"#)]
    #[case(r#"[{"id":"x","type":"income","amount":10,"category":"food","date":"2024-03-01"}]"#)]
    #[case(r#"[{"id":"x","type":"expense","amount":10,"category":"food","date":"bad"}]"#)]
    #[case(r#"{"id":"x"}"#)]
    fn test_deserialize_failing(#[case] s: &str) {
        assert!(s.parse::<Transactionlist>().is_err())
    }

    #[test]
    fn test_prepend_orders_most_recent_first() {
        let mut rl = Transactionlist::new();
        rl.prepend(tx("a", Category::Food, 100, "2024-03-01"));
        rl.prepend(tx("b", Category::Housing, 200, "2024-03-02"));
        let ids = rl.iter().map(Transaction::id).collect::<Vec<_>>();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_remove() {
        let mut rl = [
            tx("a", Category::Food, 100, "2024-03-01"),
            tx("b", Category::Housing, 200, "2024-03-02"),
        ]
        .into_iter()
        .collect::<Transactionlist>();

        assert_eq!(rl.remove("missing"), None);
        assert_eq!(rl.len(), 2);

        let removed = rl.remove("a").unwrap();
        assert_eq!(removed.id(), "a");
        assert_eq!(rl.len(), 1);
        assert!(rl.get("a").is_none());
        assert!(rl.get("b").is_some());
    }

    #[test]
    fn test_update() {
        let mut rl = [tx("a", Category::Food, 100, "2024-03-01")]
            .into_iter()
            .collect::<Transactionlist>();

        assert_eq!(rl.update("missing", &Patch::new()), None);

        let patch = Patch::new().amount(Kobo(500)).unwrap();
        let updated = rl.update("a", &patch).unwrap();
        assert_eq!(updated.amount(), Kobo(500));
        assert_eq!(rl.get("a").unwrap().amount(), Kobo(500));
        assert_eq!(rl.len(), 1);
    }

    #[test]
    fn test_for_month() {
        let rl = [
            tx("a", Category::Food, 100, "2024-03-01"),
            tx("b", Category::Food, 200, "2024-04-01"),
            tx("c", Category::Income, 300, "2024-03-20"),
        ]
        .into_iter()
        .collect::<Transactionlist>();

        let march = "2024-03".parse::<Monthkey>().unwrap();
        let ids = rl.for_month(march).map(Transaction::id).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(rl.for_month("2025-01".parse().unwrap()).count(), 0);
    }
}
