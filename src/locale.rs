use crate::Date;
use crate::Kobo;

/// Presentation settings for amounts and dates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    currency_symbol: String,
}

impl Locale {
    /// Formats an amount with the currency symbol. The sign comes before the
    /// symbol, so `-300` naira renders as `-₦300`.
    pub fn currency(&self, amount: Kobo) -> String {
        let s = amount.to_string();
        match s.strip_prefix('-') {
            Some(magnitude) => format!("-{}{}", self.currency_symbol, magnitude),
            None => format!("{}{}", self.currency_symbol, s),
        }
    }

    /// Formats a date as `DD/MM/YYYY`.
    pub fn date(&self, date: Date) -> String {
        let fmt = time::macros::format_description!("[day]/[month]/[year]");
        date.format(fmt).expect("formatting should succeed")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Kobo(0), "₦0")]
    #[case(Kobo::from_naira(1500), "₦1,500")]
    #[case(Kobo(123456), "₦1,234.56")]
    #[case(Kobo(50), "₦0.50")]
    #[case(Kobo::from_naira(-300), "-₦300")]
    #[case(Kobo(-50), "-₦0.50")]
    fn test_currency(#[case] amount: Kobo, #[case] want: &str) {
        assert_eq!(Locale::default().currency(amount), want)
    }

    #[rstest]
    #[case(Kobo::from_naira(25), "$25")]
    #[case(Kobo::from_naira(-25), "-$25")]
    fn test_currency_custom_symbol(#[case] amount: Kobo, #[case] want: &str) {
        let locale = Locale {
            currency_symbol: "$".to_string(),
        };
        assert_eq!(locale.currency(amount), want)
    }

    #[rstest]
    #[case("2024-03-15", "15/03/2024")]
    #[case("2024-12-01", "01/12/2024")]
    #[case("0850-01-07", "07/01/0850")]
    fn test_date(#[case] date: Date, #[case] want: &str) {
        assert_eq!(Locale::default().date(date), want)
    }

    #[test]
    fn test_serde() {
        let locale = serde_json::from_str::<Locale>(r#"{"currencySymbol": "$"}"#).unwrap();
        assert_eq!(locale.currency_symbol, "$");

        let locale = serde_json::from_str::<Locale>("{}").unwrap();
        assert_eq!(locale, Locale::default());

        let s = serde_json::to_string(&Locale::default()).unwrap();
        assert_eq!(s, r#"{"currencySymbol":"₦"}"#);
    }
}
