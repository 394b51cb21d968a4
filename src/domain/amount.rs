use crate::error::PaymentError;
use std::fmt;
use std::str::FromStr;

/// A transaction amount as entered by the user.
///
/// Wraps an `f64` without any sign or range checks: anything that parses as a
/// real number is a valid amount, including negative values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    /// Parses the trimmed input as a floating-point number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| PaymentError::InvalidAmount(s.trim().to_string()))
    }
}

/// Renders the amount with the shortest round-trip digits.
///
/// Integral values keep a trailing `.0`. Magnitudes below `1e-4` or at least
/// `1e16` switch to exponent notation with a signed two-digit exponent
/// (`1e+16`, `1.5e-05`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        let sci = format!("{v:e}");
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if (-4..16).contains(&exp) {
            let plain = v.to_string();
            if plain.contains('.') {
                f.write_str(&plain)
            } else {
                write!(f, "{plain}.0")
            }
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exp.abs())
        }
    }
}
