use crate::Charset;
use crate::Locale;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub transactions_key: String,
    pub budgets_key: String,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    pub locale: Locale,
}

impl Config {
    pub fn charset(&self) -> Charset {
        let mut charset = Charset::default();
        if self.use_unicode_symbols {
            charset = charset.with_unicode()
        }
        if self.use_colored_output {
            charset = charset.with_color()
        }
        charset
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transactions_key: "finance-tracker-transactions".to_string(),
            budgets_key: "finance-tracker-budgets".to_string(),
            use_colored_output: false,
            use_unicode_symbols: false,
            locale: Locale::default(),
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
