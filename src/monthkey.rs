use crate::Date;

/// A billing period: one calendar month of one year, keyed as `yyyy-mm`.
/// Derived from a transaction's date, never from input or save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monthkey {
    year: u16,
    month: u8,
}

impl Monthkey {
    pub fn new(year: u16, month: u8) -> Option<Self> {
        ((1..=12).contains(&month) && year <= 9999).then_some(Self { year, month })
    }

    pub fn year(self) -> u16 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the month key of today's date.
    pub fn current() -> Self {
        Date::today().into()
    }

    /// Returns the human-readable label, e.g. `March 2024`.
    pub fn label(self) -> String {
        let month = time::Month::try_from(self.month).expect("month should be within 1..=12");
        format!("{} {:04}", month, self.year)
    }
}

impl From<Date> for Monthkey {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for Monthkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("input is not in 'yyyy-mm' form")]
    BadFormat,
    #[error("month is not within 01..=12")]
    OutOfRange,
}

impl std::str::FromStr for Monthkey {
    type Err = ParseError;

    /// Parses a `yyyy-mm` month key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let (y, m) = s.split_once('-').ok_or(Self::Err::BadFormat)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(Self::Err::BadFormat);
        }
        let year = y.parse::<u16>().map_err(|_| Self::Err::BadFormat)?;
        let month = m.parse::<u8>().map_err(|_| Self::Err::BadFormat)?;
        Self::new(year, month).ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Monthkey {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2024-03-15", "2024-03")]
    #[case("2024-12-31", "2024-12")]
    #[case("2024-01-01", "2024-01")]
    #[case("0000-01-01", "0000-01")]
    #[case("9999-12-31", "9999-12")]
    fn test_from_date(#[case] date: &str, #[case] want: &str) {
        let dt = date.parse::<Date>().unwrap();
        assert_eq!(dt.monthkey().to_string(), want);
        assert_eq!(dt.monthkey(), want.parse::<Monthkey>().unwrap());
    }

    #[rstest]
    #[case("2024-03", 2024, 3)]
    #[case("0001-01", 1, 1)]
    #[case("9999-12", 9999, 12)]
    fn test_from_str(#[case] s: &str, #[case] year: u16, #[case] month: u8) {
        let mk = s.parse::<Monthkey>().unwrap();
        assert_eq!(mk, Monthkey::new(year, month).unwrap());
        assert_eq!(mk.to_string(), s);
    }

    #[rstest]
    #[case("")]
    #[case("2024")]
    #[case("2024-3")]
    #[case("24-03")]
    #[case("2024-00")]
    #[case("2024-13")]
    #[case("03-2024")]
    #[case("2024-03-15")]
    #[case("2024_03")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Monthkey>().is_err())
    }

    #[rstest]
    #[case("2024-03", "March 2024")]
    #[case("2024-12", "December 2024")]
    #[case("0850-01", "January 0850")]
    fn test_label(#[case] mk: Monthkey, #[case] want: &str) {
        assert_eq!(mk.label(), want)
    }

    #[test]
    fn test_current_uses_today() {
        assert_eq!(Monthkey::current(), "2024-03".parse().unwrap());
    }

    #[test]
    fn test_ordering() {
        let a = "2024-03".parse::<Monthkey>().unwrap();
        let b = "2024-04".parse::<Monthkey>().unwrap();
        let c = "2025-01".parse::<Monthkey>().unwrap();
        assert!(a < b && b < c);
    }
}
