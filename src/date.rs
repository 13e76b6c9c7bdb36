/// A calendar date without time or timezone information. Values are
/// guaranteed to be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000-01-01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999-12-31));

    pub fn year(self) -> u16 {
        self.0.year() as u16
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: u16, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year as i32, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the month key of the calendar month this date falls in.
    pub fn monthkey(self) -> crate::Monthkey {
        self.into()
    }

    /// Returns the local date, falling back to UTC when the local offset
    /// cannot be determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now =
            time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date, falling back to UTC when the local offset
    /// cannot be determined.
    #[cfg(test)]
    pub fn today() -> Self {
        Self(time::macros::date!(2024-03-15))
    }

    pub fn format(
        self,
        fmt: &(impl time::formatting::Formattable + ?Sized),
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a `yyyy-mm-dd` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        let inner = time::Date::parse(s, fmt)?;
        Self::new(inner).ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_min_max_consts() {
        assert_eq!(Date::MIN, Date::from_ymd(0, 1, 1).unwrap());
        assert_eq!(Date::MAX, Date::from_ymd(9999, 12, 31).unwrap());
    }

    #[test]
    fn test_today_is_fixed_in_tests() {
        assert_eq!(Date::today(), Date::from_ymd(2024, 3, 15).unwrap());
    }

    #[rstest]
    #[case("2024-03-15", Date::from_ymd(2024, 3, 15).unwrap())]
    #[case("2024-12-31", Date::from_ymd(2024, 12, 31).unwrap())]
    #[case("0000-01-01", Date::MIN)]
    #[case("9999-12-31", Date::MAX)]
    fn test_iso8601_conv(#[case] s: &str, #[case] dt: Date) {
        assert_eq!(s.parse::<Date>().unwrap(), dt);
        assert_eq!(dt.to_string(), s);
    }

    #[rstest]
    #[case("")]
    #[case("2024-3-15")]
    #[case("2024-03")]
    #[case("2024-13-01")]
    #[case("2024-02-30")]
    #[case("15/03/2024")]
    #[case("2024-03-15T00:00:00")]
    #[case("-0044-03-15")]
    #[case("not a date")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Date>().is_err())
    }

    #[rstest]
    #[case(Date::from_ymd(2024, 3, 15).unwrap(), r#""2024-03-15""#)]
    #[case(Date::MIN, r#""0000-01-01""#)]
    fn test_serde(#[case] dt: Date, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&dt).unwrap(), json);
        assert_eq!(serde_json::from_str::<Date>(json).unwrap(), dt);
    }

    #[test]
    fn test_ymd_accessors() {
        let dt = Date::from_ymd(2024, 3, 5).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert!(Date::from_ymd(2024, 0, 1).is_none());
        assert!(Date::from_ymd(2024, 2, 30).is_none());
        assert!(Date::from_ymd(10000, 1, 1).is_none());
    }
}
