use crate::Kobo;

/// How spending in a category compares against its limit. Variants are
/// ordered from healthiest to worst.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    Approaching,
    Over,
}

impl BudgetStatus {
    /// Classifies spending against a limit. At or past the limit is over,
    /// at or past four fifths of it is approaching. A zero limit leaves no
    /// room at all, so any spending is over and none is under.
    pub fn classify(spent: Kobo, limit: Kobo) -> Self {
        if limit <= Kobo(0) {
            return if spent > Kobo(0) { Self::Over } else { Self::Under };
        }
        if spent >= limit {
            return Self::Over;
        }
        if (spent.0 as i128) * 5 >= (limit.0 as i128) * 4 {
            return Self::Approaching;
        }
        Self::Under
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under => "On track",
            Self::Approaching => "Almost there",
            Self::Over => "Over budget",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Kobo(0), Kobo(50000), BudgetStatus::Under)]
    #[case(Kobo(39999), Kobo(50000), BudgetStatus::Under)]
    #[case(Kobo(40000), Kobo(50000), BudgetStatus::Approaching)]
    #[case(Kobo(49999), Kobo(50000), BudgetStatus::Approaching)]
    #[case(Kobo(50000), Kobo(50000), BudgetStatus::Over)]
    #[case(Kobo(75000), Kobo(50000), BudgetStatus::Over)]
    #[case(Kobo(0), Kobo(0), BudgetStatus::Under)]
    #[case(Kobo(1), Kobo(0), BudgetStatus::Over)]
    #[case(Kobo(0), Kobo(-100), BudgetStatus::Under)]
    #[case(Kobo(1), Kobo(-100), BudgetStatus::Over)]
    #[case(Kobo(i64::MAX - 1), Kobo(i64::MAX), BudgetStatus::Approaching)]
    #[case(Kobo(i64::MAX), Kobo(i64::MAX), BudgetStatus::Over)]
    fn test_classify(#[case] spent: Kobo, #[case] limit: Kobo, #[case] want: BudgetStatus) {
        assert_eq!(BudgetStatus::classify(spent, limit), want)
    }

    #[test]
    fn test_classify_is_monotonic() {
        let limit = Kobo(1000);
        let mut last = BudgetStatus::Under;
        for spent in 0..=1100 {
            let status = BudgetStatus::classify(Kobo(spent), limit);
            assert!(status >= last, "status regressed at {spent}");
            last = status;
        }
    }

    #[rstest]
    #[case(BudgetStatus::Under, "under", "On track")]
    #[case(BudgetStatus::Approaching, "approaching", "Almost there")]
    #[case(BudgetStatus::Over, "over", "Over budget")]
    fn test_names(#[case] status: BudgetStatus, #[case] name: &str, #[case] label: &str) {
        assert_eq!(status.to_string(), name);
        assert_eq!(status.label(), label);
    }
}
