/// Amount of money as an integral count of kobo (hundredths of a naira).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Kobo(pub i64);

impl Kobo {
    pub const fn from_naira(naira: i64) -> Self {
        Self(naira * 100)
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Kobo {
    /// Formats with comma thousands separators. Whole-naira amounts omit the
    /// decimal part entirely; fractional amounts always show two decimal
    /// places. Negative amounts carry a leading minus sign.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let minor = self.0.unsigned_abs();
        let (naira, frac) = (minor / 100, minor % 100);
        let digits = naira.to_string();
        let mut s = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        if self.0 < 0 {
            s.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
        }
        if frac != 0 {
            s.push('.');
            s.push((b'0' + (frac / 10) as u8) as char);
            s.push((b'0' + (frac % 10) as u8) as char);
        }
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("input contains a character that is not a digit, comma, sign, or decimal point")]
    NonNumeric,
    #[error("amount is out of representable range")]
    OutOfRange,
}

impl std::str::FromStr for Kobo {
    type Err = ParseError;

    /// Parses an amount from a human-readable naira string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(',', "");
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s.as_str())),
        };
        let (whole, frac) = match unsigned.split_once('.') {
            Some((w, fr)) => (w, fr),
            None => (unsigned, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(Self::Err::Empty);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::Err::NonNumeric);
        }

        let naira = match whole {
            "" => 0,
            _ => whole.parse::<i64>().map_err(|_| Self::Err::OutOfRange)?,
        };
        let kobo = match frac.get(..2).unwrap_or(frac) {
            "" => 0,
            one if one.len() == 1 => one.parse::<i64>().map_err(|_| Self::Err::OutOfRange)? * 10,
            two => two.parse::<i64>().map_err(|_| Self::Err::OutOfRange)?,
        };
        let total = naira
            .checked_mul(100)
            .and_then(|n| n.checked_add(kobo))
            .ok_or(Self::Err::OutOfRange)?;
        Ok(Self(if negative { -total } else { total }))
    }
}

impl TryFrom<&str> for Kobo {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
