use std::fmt;
use std::iter;
use std::str::FromStr;

use thiserror::Error;

/// Money as a whole number of minor units (cents).
///
/// All arithmetic stays in the integer domain. Floating point only shows up
/// in [`Cents::from_float`] and in the float-notation fallback of the
/// [`FromStr`] impl, both at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(i64);

/// Errors produced when turning user text into [`Cents`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("empty amount")]
    Empty,

    #[error("'{0}' is not a valid amount")]
    Invalid(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

impl Cents {
    const SCALE: i64 = 100;

    pub const ZERO: Cents = Cents(0);

    /// Scale a decimal value to minor units, rounding half away from zero.
    pub fn from_float(value: f64) -> Self {
        Cents((value * Self::SCALE as f64).round() as i64)
    }

    pub fn from_minor(value: i64) -> Self {
        Cents(value)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn abs(self) -> Self {
        Cents(self.0.abs())
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Cents)
    }

    /// Parse plain decimal text (`[+-]digits[.digits]`) without going through
    /// a float. Returns `None` when the text uses any other notation.
    fn parse_decimal(text: &str) -> Option<Result<Self, ParseCentsError>> {
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return None;
        }

        let out_of_range = || ParseCentsError::OutOfRange(text.to_string());

        let mut minor: i64 = 0;
        let digits = whole
            .bytes()
            .chain(frac.bytes().chain(iter::repeat(b'0')).take(2));
        for digit in digits {
            let next = minor
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(digit - b'0')));
            match next {
                Some(value) => minor = value,
                None => return Some(Err(out_of_range())),
            }
        }

        // the third fractional digit decides the rounding of the magnitude
        if frac.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
            match minor.checked_add(1) {
                Some(value) => minor = value,
                None => return Some(Err(out_of_range())),
            }
        }

        Some(Ok(Cents(if negative { -minor } else { minor })))
    }
}

impl FromStr for Cents {
    type Err = ParseCentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseCentsError::Empty);
        }

        if let Some(result) = Self::parse_decimal(text) {
            return result;
        }

        let value: f64 = text
            .parse()
            .map_err(|_| ParseCentsError::Invalid(text.to_string()))?;
        if !value.is_finite() {
            return Err(ParseCentsError::Invalid(text.to_string()));
        }
        if (value * Self::SCALE as f64).abs() >= i64::MAX as f64 {
            return Err(ParseCentsError::OutOfRange(text.to_string()));
        }
        Ok(Self::from_float(value))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / Self::SCALE as u64;
        let frac = abs % Self::SCALE as u64;
        f.pad(&format!("{sign}{whole}.{frac:02}"))
    }
}

impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Cents(-self.0)
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, |acc, c| acc + c)
    }
}

impl<'a> iter::Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
